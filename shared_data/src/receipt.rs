use std::fmt;
use chrono::NaiveDateTime;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{EVENT, PIX_KEY, MESSAGING_DOMAIN, ShirtSize, TicketOption, contact_digits};

const RULE: &str = "--------------------------------";

// Everything except the characters that `encodeURIComponent` leaves alone, so links come out the
// same as they would if a browser had built them
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

#[must_use]
pub fn encode_component(text: &str) -> String {
	utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// The plain-text order summary that gets sent over WhatsApp along with the PIX receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt<'o> {
	option: &'o TicketOption,
	size: Option<ShirtSize>,
	issued_at: NaiveDateTime
}

impl<'o> Receipt<'o> {
	/// `size` is dropped if the option doesn't come with a shirt
	#[must_use]
	pub fn new(option: &'o TicketOption, size: ShirtSize, issued_at: NaiveDateTime) -> Self {
		Self {
			option,
			size: option.includes_shirt.then_some(size),
			issued_at
		}
	}

	#[must_use]
	pub fn option(&self) -> &'o TicketOption {
		self.option
	}

	#[must_use]
	pub fn size(&self) -> Option<ShirtSize> {
		self.size
	}

	#[must_use]
	pub fn whatsapp_url(&self) -> String {
		format!(
			"https://{MESSAGING_DOMAIN}/{}?text={}",
			contact_digits(),
			encode_component(&self.to_string())
		)
	}
}

impl fmt::Display for Receipt<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{RULE}")?;
		writeln!(f, "    {}", EVENT.name.to_uppercase())?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "DATA: {}", self.issued_at.format("%d/%m/%Y %H:%M"))?;
		writeln!(f, "LOCAL: {}", EVENT.location)?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "ITEM: {}", self.option.name.to_uppercase())?;
		if let Some(size) = self.size {
			writeln!(f, "TAMANHO: {size}")?;
		}
		writeln!(f, "VALOR: {}", self.option.display_price())?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "PAGAMENTO: PIX")?;
		writeln!(f, "CHAVE: {PIX_KEY}")?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "OBRIGADO PELA PREFERÊNCIA!")?;
		writeln!(f, "{RULE}")?;
		writeln!(f, "    *ENVIE O COMPROVANTE*")?;
		writeln!(f, "    *DO PIX JUNTO COM*")?;
		writeln!(f, "    *ESTA MENSAGEM*")?;
		// no newline after the last one
		write!(f, "{RULE}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TICKET_OPTIONS;
	use chrono::NaiveDate;
	use percent_encoding::percent_decode_str;

	fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2026, 7, d)
			.and_then(|day| day.and_hms_opt(h, m, 0))
			.unwrap()
	}

	#[test]
	fn shirt_receipt_matches_template() {
		let receipt = Receipt::new(&TICKET_OPTIONS[1], ShirtSize::G, at(3, 9, 5));

		let expected = "\
--------------------------------
    CASTELO ROCK FEST 2026
--------------------------------
DATA: 03/07/2026 09:05
LOCAL: Arari - MA
--------------------------------
ITEM: INGRESSO + CAMISA
TAMANHO: G
VALOR: R$ 50,00
--------------------------------
PAGAMENTO: PIX
CHAVE: 98984595785
--------------------------------
OBRIGADO PELA PREFERÊNCIA!
--------------------------------
    *ENVIE O COMPROVANTE*
    *DO PIX JUNTO COM*
    *ESTA MENSAGEM*
--------------------------------";

		assert_eq!(receipt.to_string(), expected);
	}

	#[test]
	fn ticket_only_never_has_a_size() {
		for size in ShirtSize::ALL {
			let receipt = Receipt::new(&TICKET_OPTIONS[0], size, at(11, 22, 30));
			let text = receipt.to_string();

			assert_eq!(receipt.size(), None);
			assert!(!text.contains("TAMANHO:"));
			assert!(text.contains("ITEM: INGRESSO INDIVIDUAL\nVALOR: R$ 20,00\n"));
		}
	}

	#[test]
	fn encoding_matches_uri_component_rules() {
		assert_eq!(encode_component("a-z_A.Z!~*'()"), "a-z_A.Z!~*'()");
		assert_eq!(encode_component("R$ 50,00\n"), "R%24%2050%2C00%0A");
		assert_eq!(encode_component("Ê"), "%C3%8A");
		assert_eq!(encode_component("a+b/c?d=e&f#"), "a%2Bb%2Fc%3Fd%3De%26f%23");
	}

	#[test]
	fn link_decodes_back_to_receipt() {
		let receipt = Receipt::new(&TICKET_OPTIONS[1], ShirtSize::P, at(11, 16, 0));
		let url = receipt.whatsapp_url();

		let (target, query) = url.split_once("?text=").unwrap();
		assert_eq!(target, "https://wa.me/5598984595785");
		assert!(!query.contains(['\n', ' ', '&', '#']));

		let decoded = percent_decode_str(query).decode_utf8().unwrap();
		assert_eq!(decoded, receipt.to_string());
	}
}
