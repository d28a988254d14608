mod catalog;
mod event;
mod receipt;
pub mod checkout;

pub use catalog::{
	TicketOption,
	TICKET_OPTIONS,
	ticket_by_id,
	ShirtSize,
	UnknownSize,
	PIX_KEY,
	COUNTRY_CODE,
	MESSAGING_DOMAIN,
	contact_digits,
	contact_link
};
pub use event::{EventInfo, EVENT, LineupEntry, LINEUP, Accent, SPONSOR_SLOTS, SPONSOR_PLACEHOLDER};
pub use receipt::{Receipt, encode_component};

pub const BASE_STYLE: &str = r#"
* {
	--page-background: #0a0a0a;
	--card-background: #18181b;
	--card-border: #27272a;
	--muted-text: #71717a;
	--main-text: #f4f4f5;
	--accent: #dc2626;
	--accent-hover: #b91c1c;
	box-sizing: border-box;
	font-family: "Inter", Arial, sans-serif;
	color: var(--main-text);
}
html {
	scroll-behavior: smooth;
}
body {
	background-color: var(--page-background);
	margin: 0;
}
::selection {
	background-color: var(--accent);
	color: white;
}
a {
	text-decoration: none;
}
h1, h2, h3, .brand {
	font-weight: 900;
	font-style: italic;
	text-transform: uppercase;
	letter-spacing: -0.04em;
}
.red {
	color: var(--accent);
}
.section {
	padding: 96px 16px;
}
.section-title {
	text-align: center;
	margin-bottom: 64px;
}
.section-title h2 {
	font-size: 56px;
	margin: 0 0 16px 0;
}
.section-title p {
	color: var(--muted-text);
	max-width: 560px;
	margin: 0 auto;
}
.content {
	max-width: 1280px;
	margin: 0 auto;
}
.card {
	background-color: var(--card-background);
	border: 1px solid var(--card-border);
	border-radius: 24px;
	padding: 32px;
}
.button {
	display: inline-block;
	background-color: var(--accent);
	color: white;
	border: none;
	border-radius: 999px;
	padding: 10px 24px;
	font-weight: 700;
	cursor: pointer;
	transition: 0.2s linear;
}
.button:hover {
	background-color: var(--accent-hover);
}
.brand-mark {
	display: inline-flex;
	align-items: center;
	justify-content: center;
	width: 40px;
	height: 40px;
	background-color: var(--accent);
	border-radius: 8px;
	font-weight: 900;
	font-style: italic;
	font-size: 24px;
	transform: skewX(-12deg);
}
.accent-gold { color: #eab308; }
.accent-red { color: var(--accent); }
.accent-blue { color: #3b82f6; }
.accent-purple { color: #a855f7; }
"#;

pub const SECTIONS_STYLE: &str = r"
#hero {
	min-height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	text-align: center;
	background: linear-gradient(to top, var(--page-background), rgba(0, 0, 0, 0.6)), url('https://picsum.photos/seed/rockfest/1920/1080?blur=2') center / cover;
	padding: 120px 16px 40px 16px;
}
#hero h1 {
	font-size: 96px;
	line-height: 1;
	margin: 0 0 24px 0;
}
.region-badge {
	display: inline-block;
	padding: 4px 16px;
	margin-bottom: 24px;
	border: 1px solid var(--accent);
	border-radius: 999px;
	color: var(--accent);
	font-weight: 700;
	letter-spacing: 0.2em;
	text-transform: uppercase;
	font-size: 14px;
}
.tagline {
	font-size: 22px;
	color: #a1a1aa;
	max-width: 672px;
	margin: 0 auto 48px auto;
}
.info-cards {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
	gap: 24px;
	max-width: 1024px;
	margin: 0 auto 48px auto;
}
.info-card {
	background-color: rgba(255, 255, 255, 0.05);
	border: 1px solid rgba(255, 255, 255, 0.1);
	border-radius: 16px;
	padding: 16px;
	text-align: left;
}
.info-card .label {
	font-size: 12px;
	color: var(--muted-text);
	text-transform: uppercase;
	font-weight: 700;
	margin: 0;
}
.info-card .value {
	font-weight: 700;
	margin: 0;
}
.grid {
	display: grid;
	gap: 32px;
	grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}
.lineup-entry {
	text-align: center;
}
.lineup-entry p {
	color: var(--muted-text);
}
.tickets {
	max-width: 896px;
	margin: 0 auto;
}
.ticket {
	position: relative;
	display: flex;
	flex-direction: column;
}
.ticket.featured {
	border: 2px solid var(--accent);
}
.ticket .badge {
	position: absolute;
	top: -14px;
	left: 50%;
	transform: translateX(-50%);
	background-color: var(--accent);
	border-radius: 999px;
	padding: 4px 16px;
	font-size: 12px;
	font-weight: 900;
	text-transform: uppercase;
	letter-spacing: 0.15em;
}
.ticket .description {
	color: var(--muted-text);
	font-size: 14px;
}
.ticket .price {
	font-size: 48px;
	font-weight: 900;
	margin: 32px 0 24px 0;
}
.ticket .price small {
	font-size: 14px;
	color: var(--muted-text);
	margin-right: 4px;
}
.sponsor-slot {
	aspect-ratio: 16 / 9;
	display: flex;
	align-items: center;
	justify-content: center;
	color: #3f3f46;
	font-weight: 900;
	font-style: italic;
	text-transform: uppercase;
	letter-spacing: 0.1em;
	font-size: 14px;
	padding: 8px;
}
.sponsor-call {
	margin-top: 64px;
	text-align: center;
	color: #a1a1aa;
}
.sponsor-call a {
	color: var(--accent);
	font-weight: 700;
	font-style: italic;
	text-transform: uppercase;
}
footer {
	background-color: black;
	padding: 48px 16px;
	border-top: 1px solid rgba(255, 255, 255, 0.05);
}
footer .content {
	display: flex;
	flex-wrap: wrap;
	gap: 32px;
	justify-content: space-between;
	align-items: center;
}
footer .copyright {
	color: #52525b;
	font-size: 14px;
}
";
