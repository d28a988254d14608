use axum::response::Html;
use horrorshow::{html, Raw, helper::doctype, Template};
use std::sync::OnceLock;

build_info::build_info!(pub fn build);

pub async fn get_license_page() -> Html<&'static str> {
	// We can make this a OnceLock because it'll only change if dependencies change, and those
	// aren't gonna change unless we rebuild it
	static LICENSE_HTML: OnceLock<String> = OnceLock::new();

	Html(LICENSE_HTML.get_or_init(render_licenses).as_str())
}

fn render_licenses() -> String {
	let build_info = build();
	let crate_info = &build_info.crate_info;
	let no_license = "No license".to_string();

	html! {
		: doctype::HTML;
		html(lang = "pt-BR") {
			head {
				meta(charset = "utf-8");
				title : "Castelo Rock Fest (licenças)";
				style : Raw(festival_data::BASE_STYLE);
			}
			body {
				div(class = "section content") {
					h1 : "Licenças";
					p {
						: format!(
							"{} {}, built at {} with rustc {}",
							crate_info.name,
							crate_info.version,
							build_info.timestamp,
							build_info.compiler.version
						);
					}
					ul {
						// our own crates aren't really dependencies
						@ for krate in crate_info.dependencies.iter().filter(|dep| !dep.name.starts_with("festival_")) {
							li {
								a(href = format_args!("https://crates.io/crates/{}", krate.name), class = "red") : &krate.name;
								: ": ";
								: krate.license.as_ref().unwrap_or(&no_license);
							}
						}
					}
					a(class = "button", href = "/") : "Voltar";
				}
			}
		}
	}.into_string()
		.unwrap_or_else(|e| format!("Couldn't render the license list: {e}"))
}
