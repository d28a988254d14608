use axum::Json;
use serde::Serialize;
use festival_data::{EventInfo, ShirtSize, TicketOption, EVENT, TICKET_OPTIONS, PIX_KEY, contact_link};

/// Everything the ticket page shows, for anyone who'd rather not scrape it
#[derive(Serialize)]
pub struct Catalog {
	event: EventInfo,
	tickets: &'static [TicketOption],
	sizes: [ShirtSize; 3],
	pix_key: &'static str,
	contact: String
}

pub async fn get_catalog() -> Json<Catalog> {
	Json(Catalog {
		event: EVENT,
		tickets: &TICKET_OPTIONS,
		sizes: ShirtSize::ALL,
		pix_key: PIX_KEY,
		contact: contact_link()
	})
}
