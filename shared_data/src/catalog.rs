use std::{fmt, str::FromStr};
use serde::Serialize;

/// The PIX key people pay to. It's also the WhatsApp number that receipts get sent to, once the
/// country code is stuck on the front.
pub const PIX_KEY: &str = "98984595785";
pub const COUNTRY_CODE: &str = "55";
pub const MESSAGING_DOMAIN: &str = "wa.me";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketOption {
	pub id: &'static str,
	pub name: &'static str,
	pub price: u32,
	pub description: &'static str,
	pub includes_shirt: bool
}

impl TicketOption {
	/// e.g. `R$ 50,00`. We only ever sell in whole reais so the cents are always zero
	#[must_use]
	pub fn display_price(&self) -> String {
		format!("R$ {},00", self.price)
	}
}

pub static TICKET_OPTIONS: [TicketOption; 2] = [
	TicketOption {
		id: "ticket-only",
		name: "Ingresso Individual",
		price: 20,
		description: "Acesso total ao evento Castelo Rock Fest 2026.",
		includes_shirt: false
	},
	TicketOption {
		id: "ticket-shirt",
		name: "Ingresso + Camisa",
		price: 50,
		description: "Acesso total ao evento + Camisa oficial do festival (P, M ou G).",
		includes_shirt: true
	}
];

#[must_use]
pub fn ticket_by_id(id: &str) -> Option<&'static TicketOption> {
	TICKET_OPTIONS.iter().find(|t| t.id == id)
}

/// The digits that come after `wa.me/`
#[must_use]
pub fn contact_digits() -> String {
	format!("{COUNTRY_CODE}{PIX_KEY}")
}

/// A bare link to the festival's WhatsApp, with no message attached
#[must_use]
pub fn contact_link() -> String {
	format!("https://{MESSAGING_DOMAIN}/{}", contact_digits())
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShirtSize {
	P,
	#[default]
	M,
	G
}

impl ShirtSize {
	pub const ALL: [Self; 3] = [Self::P, Self::M, Self::G];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::P => "P",
			Self::M => "M",
			Self::G => "G"
		}
	}
}

impl fmt::Display for ShirtSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl fmt::Display for UnknownSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "'{}' is not a shirt size (expected P, M, or G)", self.0)
	}
}

impl std::error::Error for UnknownSize {}

impl FromStr for ShirtSize {
	type Err = UnknownSize;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"P" | "p" => Ok(Self::P),
			"M" | "m" => Ok(Self::M),
			"G" | "g" => Ok(Self::G),
			other => Err(UnknownSize(other.to_string()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog_is_fixed() {
		let [solo, shirt] = TICKET_OPTIONS;

		assert_eq!(solo.id, "ticket-only");
		assert_eq!(solo.name, "Ingresso Individual");
		assert_eq!(solo.price, 20);
		assert_eq!(solo.description, "Acesso total ao evento Castelo Rock Fest 2026.");
		assert!(!solo.includes_shirt);

		assert_eq!(shirt.id, "ticket-shirt");
		assert_eq!(shirt.name, "Ingresso + Camisa");
		assert_eq!(shirt.price, 50);
		assert_eq!(shirt.description, "Acesso total ao evento + Camisa oficial do festival (P, M ou G).");
		assert!(shirt.includes_shirt);
	}

	#[test]
	fn prices_display_in_reais() {
		assert_eq!(TICKET_OPTIONS[0].display_price(), "R$ 20,00");
		assert_eq!(TICKET_OPTIONS[1].display_price(), "R$ 50,00");
	}

	#[test]
	fn lookup_by_id() {
		assert_eq!(ticket_by_id("ticket-shirt"), Some(&TICKET_OPTIONS[1]));
		assert_eq!(ticket_by_id("vip"), None);
	}

	#[test]
	fn contact_is_pix_key_with_country_code() {
		assert_eq!(contact_digits(), "5598984595785");
		assert_eq!(contact_link(), "https://wa.me/5598984595785");
	}

	#[test]
	fn sizes_parse() {
		assert_eq!(ShirtSize::default(), ShirtSize::M);
		for size in ShirtSize::ALL {
			assert_eq!(size.to_string().parse::<ShirtSize>(), Ok(size));
		}
		assert_eq!(" g ".parse::<ShirtSize>(), Ok(ShirtSize::G));
		assert_eq!("XL".parse::<ShirtSize>(), Err(UnknownSize("XL".into())));
	}

	#[test]
	fn catalog_serializes() {
		let json = serde_json::to_value(TICKET_OPTIONS[1]).unwrap();
		assert_eq!(json["id"], "ticket-shirt");
		assert_eq!(json["price"], 50);
		assert_eq!(json["includes_shirt"], true);
	}
}
