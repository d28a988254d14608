use std::rc::Rc;
use chrono::{NaiveDate, NaiveDateTime};
use festival_data::{
	PIX_KEY,
	ShirtSize,
	TicketOption,
	checkout::{AckToken, CheckoutFlow, Host, COPY_ACK_DURATION}
};
use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use crate::icons::{icon, CHECK, CLOSE, COPY, EXTERNAL};

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
	fn now(&self) -> NaiveDateTime {
		// js' Date gives us local time, which is what people expect to see on their receipt.
		// chrono's local clock would need a whole timezone database shipped to the browser.
		let date = js_sys::Date::new_0();

		NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
			.and_then(|day| day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
			.unwrap_or_default()
	}

	fn open_link(&self, url: &str) {
		let Some(window) = web_sys::window() else {
			log!("No window to open the checkout link in");
			return;
		};

		match window.open_with_url_and_target(url, "_blank") {
			Ok(Some(_)) => (),
			// popup blockers like to do this
			Ok(None) => log!("Opening the checkout link was blocked"),
			Err(e) => log!("Couldn't open checkout link:", e)
		}
	}

	fn write_clipboard(&self, text: &str) {
		let text = text.to_string();
		wasm_bindgen_futures::spawn_local(async move {
			let Some(window) = web_sys::window() else {
				log!("No window to copy to the clipboard with");
				return;
			};

			let promise = window.navigator()
				.clipboard()
				.write_text(&text);

			if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
				log!("Couldn't write PIX key to clipboard:", e);
			}
		});
	}
}

#[derive(Clone, PartialEq)]
pub struct Checkout(pub CheckoutFlow<BrowserHost>);

impl Default for Checkout {
	fn default() -> Self {
		Self(CheckoutFlow::new(BrowserHost))
	}
}

#[derive(Debug)]
pub enum CheckoutMsg {
	Select(&'static TicketOption),
	Size(ShirtSize),
	Close,
	Confirm,
	Copy(AckToken),
	ClearCopied(AckToken)
}

impl Reducible for Checkout {
	type Action = CheckoutMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut flow = self.0.clone();

		match action {
			CheckoutMsg::Select(option) => flow.select_option(option),
			CheckoutMsg::Size(size) => flow.set_size(size),
			CheckoutMsg::Close => flow.close(),
			CheckoutMsg::Confirm => if flow.confirm().is_none() {
				log!("Tried to finish a purchase with nothing selected");
			},
			CheckoutMsg::Copy(token) => flow.copy_payment_reference(token),
			CheckoutMsg::ClearCopied(token) => {
				// if this was an old timer, nothing changed and we don't need to re-render
				if !flow.clear_copied(token) {
					return self;
				}
			}
		}

		Self(flow).into()
	}
}

#[derive(Properties, PartialEq)]
pub struct CheckoutProps {
	pub checkout: UseReducerHandle<Checkout>
}

#[function_component(CheckoutDialog)]
pub fn checkout_dialog(props: &CheckoutProps) -> Html {
	let checkout = props.checkout.clone();
	let flow = &checkout.0;

	let Some(option) = flow.selected().filter(|_| flow.is_dialog_open()) else {
		return html! {};
	};

	let close = {
		let checkout = checkout.clone();
		Callback::from(move |_: MouseEvent| checkout.dispatch(CheckoutMsg::Close))
	};

	let confirm = {
		let checkout = checkout.clone();
		Callback::from(move |_: MouseEvent| checkout.dispatch(CheckoutMsg::Confirm))
	};

	// Every press gets its own token, and then only the most recent press's timer is allowed to
	// turn the check mark back off
	let copy = {
		let checkout = checkout.clone();
		Callback::from(move |_: MouseEvent| {
			let token = AckToken(uuid::Uuid::new_v4().as_u128());
			checkout.dispatch(CheckoutMsg::Copy(token));

			let checkout = checkout.clone();
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(COPY_ACK_DURATION.as_millis() as u32).await;
				checkout.dispatch(CheckoutMsg::ClearCopied(token));
			});
		})
	};

	let size_picker = option.includes_shirt.then(|| html! {
		<div>
			<p class="label">{ "Tamanho da Camisa" }</p>
			<div id="size-picker">
				{ ShirtSize::ALL.into_iter().map(|size| {
					let checkout = checkout.clone();
					html! {
						<button
							key={ size.as_str() }
							class={ classes!((flow.size() == size).then_some("chosen")) }
							onclick={ move |_| checkout.dispatch(CheckoutMsg::Size(size)) }
						>
							{ size.as_str() }
						</button>
					}
				}).collect::<Html>() }
			</div>
		</div>
	});

	html! {
		<div id="checkout">
			<style>
			{
				"
				#checkout {
					position: fixed;
					inset: 0;
					z-index: 100;
					display: flex;
					align-items: center;
					justify-content: center;
					padding: 16px;
				}
				#checkout-backdrop {
					position: absolute;
					inset: 0;
					background-color: rgba(0, 0, 0, 0.9);
					backdrop-filter: blur(4px);
				}
				#checkout-panel {
					position: relative;
					width: 100%;
					max-width: 512px;
					border-radius: 40px;
				}
				#checkout-header {
					display: flex;
					justify-content: space-between;
					align-items: center;
					margin-bottom: 32px;
				}
				#checkout-header h3 {
					margin: 0;
					font-size: 24px;
				}
				#checkout-panel .label {
					font-size: 12px;
					color: var(--muted-text);
					text-transform: uppercase;
					font-weight: 900;
				}
				#selected-item {
					background-color: rgba(39, 39, 42, 0.5);
					border: 1px solid #3f3f46;
					border-radius: 24px;
					padding: 24px;
					margin-bottom: 24px;
				}
				#selected-item .name {
					font-size: 20px;
					font-weight: 700;
					margin: 0;
				}
				#selected-item .price {
					font-size: 24px;
					font-weight: 900;
					color: var(--accent);
					margin: 8px 0 0 0;
				}
				#size-picker {
					display: flex;
					gap: 12px;
					margin-bottom: 24px;
				}
				#size-picker button {
					flex: 1;
					padding: 12px 0;
					border-radius: 12px;
					font-weight: 700;
					background-color: #27272a;
					border: 2px solid #3f3f46;
					color: #a1a1aa;
					cursor: pointer;
				}
				#size-picker button.chosen {
					background-color: var(--accent);
					border-color: var(--accent);
					color: white;
				}
				#pix-box {
					background-color: white;
					border-radius: 24px;
					padding: 24px;
					text-align: center;
				}
				#pix-box * {
					color: #18181b;
				}
				#pix-key {
					display: flex;
					justify-content: space-between;
					align-items: center;
					background-color: #f4f4f5;
					border: 1px solid #e4e4e7;
					border-radius: 16px;
					padding: 16px;
					text-align: left;
				}
				#pix-key code {
					font-weight: 700;
					letter-spacing: 0.05em;
				}
				#pix-key button {
					background-color: #e4e4e7;
					border: none;
					border-radius: 12px;
					padding: 12px;
					cursor: pointer;
				}
				#pix-key button.copied * {
					color: #16a34a;
				}
				#pix-box .hint {
					font-size: 10px;
					color: #a1a1aa;
				}
				#close-checkout {
					background: none;
					border: none;
					cursor: pointer;
				}
				#confirm-checkout {
					width: 100%;
					margin-top: 32px;
					padding: 16px 0;
					border-radius: 16px;
					font-weight: 900;
					font-style: italic;
					text-transform: uppercase;
				}
				"
			}
			</style>
			<div id="checkout-backdrop" onclick={ close.clone() } />
			<div id="checkout-panel" class="card">
				<div id="checkout-header">
					<h3>{ "Finalizar " }<span class="red">{ "Compra" }</span></h3>
					<button id="close-checkout" onclick={ close }>{ icon(CLOSE) }</button>
				</div>
				<div id="selected-item">
					<p class="label">{ "Item Selecionado" }</p>
					<p class="name">{ option.name }</p>
					<p class="price">{ option.display_price() }</p>
				</div>
				{ size_picker }
				<div id="pix-box">
					<p class="label">{ "Pagamento via PIX" }</p>
					<div id="pix-key">
						<div>
							<p class="label">{ "Chave PIX" }</p>
							<code>{ PIX_KEY }</code>
						</div>
						<button class={ classes!(flow.is_copied().then_some("copied")) } onclick={ copy }>
							{ icon(if flow.is_copied() { CHECK } else { COPY }) }
						</button>
					</div>
					<p class="hint">
						{ "Após o pagamento, envie o comprovante para o nosso WhatsApp para validação do seu ingresso." }
					</p>
				</div>
				<button id="confirm-checkout" class="button" onclick={ confirm }>
					{ "Enviar para WhatsApp " }
					{ icon(EXTERNAL) }
				</button>
			</div>
		</div>
	}
}
