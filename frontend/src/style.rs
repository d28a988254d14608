use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<>
			<style>{ festival_data::BASE_STYLE }</style>
			<style>{ festival_data::SECTIONS_STYLE }</style>
		</>
	}
}
