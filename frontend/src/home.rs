use yew::prelude::*;
use festival_data::TicketOption;
use crate::{
	style::SharedStyle,
	nav::NavBar,
	sections::{Hero, Lineup, Sponsors, Footer},
	tickets::Tickets,
	checkout::{Checkout, CheckoutDialog, CheckoutMsg}
};

#[function_component(Home)]
pub fn home() -> Html {
	// The only real state on the whole page. Everything else is just static text.
	let checkout = use_reducer_eq(Checkout::default);

	let on_select = {
		let checkout = checkout.clone();
		Callback::from(move |option: &'static TicketOption| checkout.dispatch(CheckoutMsg::Select(option)))
	};

	html! {
		<>
			<SharedStyle />
			<NavBar />
			<Hero />
			<Lineup />
			<Tickets { on_select } />
			<Sponsors />
			<Footer />
			<CheckoutDialog { checkout } />
		</>
	}
}
