use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use style::SharedStyle;

mod home;
mod style;
mod nav;
mod sections;
mod tickets;
mod checkout;
mod icons;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[at("/")]
	Home,
	#[not_found]
	#[at("/404")]
	NotFound
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::NotFound => html! {
			<>
				<SharedStyle />
				<div class="section section-title">
					<h2>{ "Página não " }<span class="red">{ "encontrada" }</span></h2>
					<p><a class="button" href="/">{ "Voltar para o início" }</a></p>
				</div>
			</>
		}
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	yew::Renderer::<Frontend>::new().render();
}
