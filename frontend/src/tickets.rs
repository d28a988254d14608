use yew::prelude::*;
use festival_data::{TicketOption, TICKET_OPTIONS};
use crate::icons::{icon, SHIRT, TICKET};

#[derive(Properties, PartialEq)]
pub struct TicketsProps {
	pub on_select: Callback<&'static TicketOption>
}

#[function_component(Tickets)]
pub fn tickets(props: &TicketsProps) -> Html {
	let cards = TICKET_OPTIONS.iter().map(|option| {
		let select = props.on_select.reform(move |_: MouseEvent| option);

		html! {
			<div key={ option.id } class={ classes!("card", "ticket", option.includes_shirt.then_some("featured")) }>
				if option.includes_shirt {
					<div class="badge">{ "Mais Vendido" }</div>
				}
				<div>
					<h3>
						{ icon(if option.includes_shirt { SHIRT } else { TICKET }) }
						{ " " }{ option.name }
					</h3>
					<p class="description">{ option.description }</p>
				</div>
				<div class="price">
					<small>{ "R$" }</small>
					{ format!("{},00", option.price) }
				</div>
				<button class="button" onclick={ select }>{ "Selecionar" }</button>
			</div>
		}
	}).collect::<Html>();

	html! {
		<section id="ingressos" class="section">
			<div class="content">
				<div class="section-title">
					<h2>{ "Escolha seu " }<span class="red">{ "Acesso" }</span></h2>
					<p>{ "Valores exclusivos de pré-venda. Garanta já o seu!" }</p>
				</div>
				<div class="grid tickets">
					{ cards }
				</div>
			</div>
		</section>
	}
}
