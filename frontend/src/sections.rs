use yew::prelude::*;
use festival_data::{EVENT, LINEUP, SPONSOR_SLOTS, SPONSOR_PLACEHOLDER, contact_link};
use crate::icons::{icon, CHEVRON, EXTERNAL};

#[function_component(Hero)]
pub fn hero() -> Html {
	let cards = [
		("Data", EVENT.date),
		("Horário", EVENT.doors),
		("Local", EVENT.venue)
	];

	html! {
		<section id="inicio">
			<div id="hero">
				<div>
					<span class="region-badge">{ EVENT.region }</span>
					<h1>{ "Castelo" }<br /><span class="red">{ "Rock Fest" }</span></h1>
					<p class="tagline">{ EVENT.tagline }</p>
					<div class="info-cards">
						{ cards.into_iter().map(|(label, value)| html! {
							<div class="info-card">
								<p class="label">{ label }</p>
								<p class="value">{ value }</p>
							</div>
						}).collect::<Html>() }
					</div>
					<a class="button" href="#ingressos">
						{ "Garantir meu lugar" }
						{ icon(CHEVRON) }
					</a>
				</div>
			</div>
		</section>
	}
}

#[function_component(Lineup)]
pub fn lineup() -> Html {
	html! {
		<section id="lineup" class="section">
			<div class="content">
				<div class="section-title">
					<h2>{ "Lineup " }<span class="red">{ "Oficial" }</span></h2>
					<p>{ "As melhores atrações reunidas para uma noite inesquecível de puro rock and roll." }</p>
				</div>
				<div class="grid">
					{ LINEUP.iter().map(|entry| html! {
						<div class={ classes!("card", "lineup-entry", entry.accent.css_class()) }>
							<h3>{ entry.title }</h3>
							<p>{ entry.description }</p>
						</div>
					}).collect::<Html>() }
				</div>
			</div>
		</section>
	}
}

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
	html! {
		<section id="patrocinio" class="section">
			<div class="content">
				<div class="section-title">
					<h2>{ "Nossos " }<span class="red">{ "Patrocinadores" }</span></h2>
					<p>{ "Marcas que acreditam e fortalecem a cena rock em nossa região." }</p>
				</div>
				<div class="grid">
					{ (0..SPONSOR_SLOTS).map(|slot| html! {
						<div class="card sponsor-slot" key={ slot }>{ SPONSOR_PLACEHOLDER }</div>
					}).collect::<Html>() }
				</div>
				<div class="sponsor-call">
					<p>{ "Quer ver sua marca no Castelo Rock Fest?" }</p>
					<a href={ contact_link() } target="_blank" rel="noopener noreferrer">
						{ "Seja um patrocinador " }
						{ icon(EXTERNAL) }
					</a>
				</div>
			</div>
		</section>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<footer>
			<div class="content">
				<div class="brand">
					<span class="brand-mark">{ "C" }</span>
					{ " Castelo Rock Fest" }
				</div>
				<div>
					<a href="#">{ "Instagram" }</a>
					{ " · " }
					<a href="#">{ "Facebook" }</a>
				</div>
				<p class="copyright">{ "© 2026 Castelo Rock Fest. Todos os direitos reservados." }</p>
			</div>
		</footer>
	}
}
