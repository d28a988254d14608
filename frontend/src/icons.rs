// Inline so that we don't need to serve (or wait on) any extra files for them
use yew::{Html, AttrValue};

macro_rules! icon{
	($($body:literal)*) => {
		concat!(
			r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
			$($body,)*
			"</svg>"
		)
	}
}

pub const MENU: &str = icon!(
	r#"<line x1="4" y1="6" x2="20" y2="6"/>"#
	r#"<line x1="4" y1="12" x2="20" y2="12"/>"#
	r#"<line x1="4" y1="18" x2="20" y2="18"/>"#
);
pub const CLOSE: &str = icon!(
	r#"<line x1="18" y1="6" x2="6" y2="18"/>"#
	r#"<line x1="6" y1="6" x2="18" y2="18"/>"#
);
pub const COPY: &str = icon!(
	r#"<rect x="9" y="9" width="13" height="13" rx="2"/>"#
	r#"<path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>"#
);
pub const CHECK: &str = icon!(
	r#"<circle cx="12" cy="12" r="10"/>"#
	r#"<polyline points="8 12 11 15 16 9"/>"#
);
pub const EXTERNAL: &str = icon!(
	r#"<path d="M15 3h6v6"/>"#
	r#"<path d="M10 14 21 3"/>"#
	r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
);
pub const CHEVRON: &str = icon!(r#"<path d="m9 18 6-6-6-6"/>"#);
pub const TICKET: &str = icon!(
	r#"<path d="M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"/>"#
	r#"<path d="M13 5v2"/><path d="M13 17v2"/><path d="M13 11v2"/>"#
);
pub const SHIRT: &str = icon!(
	r#"<path d="M20.38 3.46 16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z"/>"#
);

pub fn icon(svg: &'static str) -> Html {
	Html::from_html_unchecked(AttrValue::Static(svg))
}
