use yew::prelude::*;
use crate::icons::{icon, MENU, CLOSE};

const LINKS: [(&str, &str); 4] = [
	("#inicio", "Início"),
	("#lineup", "Lineup"),
	("#ingressos", "Ingressos"),
	("#patrocinio", "Patrocínio"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
	let menu_open = use_state(|| false);

	let toggle = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	// Picking anything in the mobile menu should also get it out of the way
	let close = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(false))
	};

	html! {
		<>
			<style>
			{
				"
				nav {
					position: fixed;
					top: 0;
					width: 100%;
					z-index: 50;
					background-color: rgba(0, 0, 0, 0.8);
					backdrop-filter: blur(12px);
					border-bottom: 1px solid rgba(255, 255, 255, 0.1);
				}
				nav .content {
					display: flex;
					justify-content: space-between;
					align-items: center;
					height: 80px;
					padding: 0 16px;
				}
				nav .brand {
					display: flex;
					align-items: center;
					gap: 8px;
					font-size: 20px;
				}
				#desktop-links {
					display: flex;
					align-items: center;
					gap: 32px;
				}
				#desktop-links a:not(.button), #mobile-menu a:not(.button) {
					font-weight: 500;
					transition: 0.2s linear;
				}
				#desktop-links a:not(.button):hover {
					color: var(--accent);
				}
				#menu-toggle {
					display: none;
					background: none;
					border: none;
					cursor: pointer;
				}
				#mobile-menu {
					position: fixed;
					inset: 0;
					z-index: 40;
					background-color: black;
					padding: 96px 16px 0 16px;
					display: flex;
					flex-direction: column;
					gap: 24px;
					text-align: center;
				}
				#mobile-menu a {
					font-size: 24px;
					font-weight: 700;
				}
				@media (max-width: 768px) {
					#desktop-links {
						display: none;
					}
					#menu-toggle {
						display: block;
					}
				}
				"
			}
			</style>
			<nav>
				<div class="content">
					<div class="brand">
						<span class="brand-mark">{ "C" }</span>
						<span>{ "Castelo Rock Fest" }</span>
					</div>
					<div id="desktop-links">
						{ LINKS.iter().map(|(href, label)| html! {
							<a href={ *href }>{ *label }</a>
						}).collect::<Html>() }
						<a class="button" href="#ingressos">{ "Comprar Agora" }</a>
					</div>
					<button id="menu-toggle" onclick={ toggle }>
						{ icon(if *menu_open { CLOSE } else { MENU }) }
					</button>
				</div>
			</nav>
			if *menu_open {
				<div id="mobile-menu">
					{ LINKS.iter().map(|(href, label)| html! {
						<a href={ *href } onclick={ close.clone() }>{ *label }</a>
					}).collect::<Html>() }
					<a class="button" href="#ingressos" onclick={ close.clone() }>{ "Comprar Agora" }</a>
				</div>
			}
		</>
	}
}
