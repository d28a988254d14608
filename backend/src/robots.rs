use crate::{print_and_ret, AppState};
use axum::{extract::State, http::StatusCode};
use sitewriter::{UrlEntry, ChangeFreq};

// It's a one-page site, so this list is not going to get much longer
const PAGES: [&str; 2] = ["/", "/sem-js"];

pub fn generate_sitemap(public_url: &str) -> Result<String, String> {
	let urls = PAGES.into_iter()
		.map(|path| Ok(UrlEntry {
			loc: format!("{public_url}{path}")
				.parse()
				.map_err(|e| format!("{public_url}{path} isn't a valid url: {e}"))?,
			lastmod: None,
			changefreq: Some(ChangeFreq::Monthly),
			priority: None
		}))
		.collect::<Result<Vec<_>, String>>()?;

	Ok(sitewriter::generate_str(&urls))
}

pub async fn get_sitemap_xml(State(state): State<AppState>) -> (StatusCode, String) {
	match state.sitemap.get_or_try_init(|| generate_sitemap(&state.public_url)) {
		Ok(xml) => (StatusCode::OK, xml.clone()),
		Err(e) => print_and_ret!("Couldn't generate sitemap.xml: {e}")
	}
}

pub async fn get_robots_txt(State(state): State<AppState>) -> String {
	format!(
		"User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
		state.public_url
	)
}
