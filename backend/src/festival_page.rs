use axum::response::Html;
use const_format::concatcp;
use horrorshow::{html, Raw, helper::doctype, RenderOnce, TemplateBuffer, Template};
use festival_data::{
	TicketOption,
	EVENT,
	LINEUP,
	TICKET_OPTIONS,
	SPONSOR_SLOTS,
	SPONSOR_PLACEHOLDER,
	PIX_KEY,
	contact_link,
	encode_component
};

const STYLE: &str = concatcp!(festival_data::BASE_STYLE, festival_data::SECTIONS_STYLE, r"
nav {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 24px;
	padding: 24px 16px;
	border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}
nav a:hover {
	color: var(--accent);
}
#hero {
	min-height: 70vh;
}
.pix {
	text-align: center;
	color: var(--muted-text);
}
.pix code {
	font-weight: 700;
	font-size: 20px;
}
");

/// Without javascript there's no checkout dialog, so each ticket links straight to a WhatsApp
/// message saying which one they want.
#[must_use]
pub fn order_link(option: &TicketOption) -> String {
	let message = format!(
		"Olá! Quero comprar: {} ({}) para o {}",
		option.name.to_uppercase(),
		option.display_price(),
		EVENT.name
	);
	format!("{}?text={}", contact_link(), encode_component(&message))
}

fn ticket_class(option: &TicketOption) -> &'static str {
	if option.includes_shirt {
		"card ticket featured"
	} else {
		"card ticket"
	}
}

pub async fn get_festival_page() -> Html<String> {
	Html(render_festival_page())
}

#[must_use]
pub fn render_festival_page() -> String {
	FestivalPage.into_string()
		.unwrap_or_else(|e| format!("Couldn't render the page: {e}"))
}

struct FestivalPage;

impl RenderOnce for FestivalPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			: doctype::HTML;
			html(lang = "pt-BR") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : EVENT.name;
					style : Raw(STYLE);
				}
				body {
					nav {
						a(href = "#inicio") : "Início";
						a(href = "#lineup") : "Lineup";
						a(href = "#ingressos") : "Ingressos";
						a(href = "#patrocinio") : "Patrocínio";
					}
					section(id = "inicio") {
						div(id = "hero") {
							div {
								span(class = "region-badge") : EVENT.region;
								h1 {
									: "Castelo";
									br;
									span(class = "red") : "Rock Fest";
								}
								p(class = "tagline") : EVENT.tagline;
								div(class = "info-cards") {
									@ for (label, value) in [("Data", EVENT.date), ("Horário", EVENT.doors), ("Local", EVENT.venue)] {
										div(class = "info-card") {
											p(class = "label") : label;
											p(class = "value") : value;
										}
									}
								}
							}
						}
					}
					section(id = "lineup", class = "section") {
						div(class = "content") {
							div(class = "section-title") {
								h2 { : "Lineup "; span(class = "red") : "Oficial"; }
							}
							div(class = "grid") {
								@ for entry in &LINEUP {
									div(class = format_args!("card lineup-entry {}", entry.accent.css_class())) {
										h3 : entry.title;
										p : entry.description;
									}
								}
							}
						}
					}
					section(id = "ingressos", class = "section") {
						div(class = "content") {
							div(class = "section-title") {
								h2 { : "Escolha seu "; span(class = "red") : "Acesso"; }
								p : "Valores exclusivos de pré-venda. Garanta já o seu!";
							}
							div(class = "grid tickets") {
								@ for option in &TICKET_OPTIONS {
									div(class = ticket_class(option)) {
										@ if option.includes_shirt {
											div(class = "badge") : "Mais Vendido";
										}
										h3 : option.name;
										p(class = "description") : option.description;
										div(class = "price") : option.display_price();
										a(class = "button", href = order_link(option), target = "_blank", rel = "noopener noreferrer") : "Pedir pelo WhatsApp";
									}
								}
							}
							p(class = "pix") {
								: "Pagamento via PIX: ";
								code : PIX_KEY;
								br;
								: "Após o pagamento, envie o comprovante para o nosso WhatsApp para validação do seu ingresso.";
							}
						}
					}
					section(id = "patrocinio", class = "section") {
						div(class = "content") {
							div(class = "section-title") {
								h2 { : "Nossos "; span(class = "red") : "Patrocinadores"; }
							}
							div(class = "grid") {
								@ for _ in 0..SPONSOR_SLOTS {
									div(class = "card sponsor-slot") : SPONSOR_PLACEHOLDER;
								}
							}
							div(class = "sponsor-call") {
								p : "Quer ver sua marca no Castelo Rock Fest?";
								a(href = contact_link(), target = "_blank", rel = "noopener noreferrer") : "Seja um patrocinador";
							}
						}
					}
					footer {
						div(class = "content") {
							span(class = "brand") : "Castelo Rock Fest";
							p(class = "copyright") : "© 2026 Castelo Rock Fest. Todos os direitos reservados.";
						}
					}
				}
			}
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use percent_encoding::percent_decode_str;

	#[test]
	fn page_has_everything() {
		let page = render_festival_page();

		assert!(page.starts_with("<!DOCTYPE html>"));
		assert!(page.contains("Castelo Night Club"));
		for entry in &LINEUP {
			assert!(page.contains(entry.title));
		}
		for option in &TICKET_OPTIONS {
			assert!(page.contains(option.name));
			assert!(page.contains(&option.display_price()));
		}
		assert_eq!(page.matches(SPONSOR_PLACEHOLDER).count(), SPONSOR_SLOTS);
		assert!(page.contains(PIX_KEY));
	}

	#[test]
	fn order_links_name_the_ticket() {
		let link = order_link(&TICKET_OPTIONS[1]);
		let (target, text) = link.split_once("?text=").unwrap();

		assert_eq!(target, "https://wa.me/5598984595785");
		assert_eq!(
			percent_decode_str(text).decode_utf8().unwrap(),
			"Olá! Quero comprar: INGRESSO + CAMISA (R$ 50,00) para o Castelo Rock Fest 2026"
		);
	}
}
