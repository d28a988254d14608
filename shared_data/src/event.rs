use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventInfo {
	pub name: &'static str,
	/// What gets printed on the `LOCAL:` line of a receipt
	pub location: &'static str,
	pub region: &'static str,
	pub date: &'static str,
	pub doors: &'static str,
	pub venue: &'static str,
	pub tagline: &'static str
}

pub const EVENT: EventInfo = EventInfo {
	name: "Castelo Rock Fest 2026",
	location: "Arari - MA",
	region: "Arari - Maranhão",
	date: "11 de Julho, 2026",
	doors: "A partir das 16:00",
	venue: "Castelo Night Club",
	tagline: "O maior encontro de rock da região está de volta. Uma experiência visceral no coração de Arari."
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
	Gold,
	Red,
	Blue,
	Purple
}

impl Accent {
	#[must_use]
	pub const fn css_class(self) -> &'static str {
		match self {
			Self::Gold => "accent-gold",
			Self::Red => "accent-red",
			Self::Blue => "accent-blue",
			Self::Purple => "accent-purple"
		}
	}
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineupEntry {
	pub title: &'static str,
	pub description: &'static str,
	pub accent: Accent
}

pub static LINEUP: [LineupEntry; 4] = [
	LineupEntry { title: "Banda Estadual", description: "Atração Principal", accent: Accent::Gold },
	LineupEntry { title: "Banda Local", description: "O Melhor de Arari", accent: Accent::Red },
	LineupEntry { title: "DJ Set", description: "Mixagens Exclusivas", accent: Accent::Blue },
	LineupEntry { title: "Participações", description: "Convidados Especiais", accent: Accent::Purple },
];

// we don't have any sponsors yet, so these are all just 'your brand here' boxes
pub const SPONSOR_SLOTS: usize = 6;
pub const SPONSOR_PLACEHOLDER: &str = "Sua Marca Aqui";
