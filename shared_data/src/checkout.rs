use std::time::Duration;
use chrono::NaiveDateTime;

use crate::{PIX_KEY, Receipt, ShirtSize, TicketOption};

/// How long the 'copied!' check mark stays up after copying the PIX key
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// The bits of the environment that the checkout needs to poke at. In the browser this is the
/// window; in tests it just writes everything down.
pub trait Host {
	/// Local wall-clock time, which is what ends up printed on the receipt
	fn now(&self) -> NaiveDateTime;
	/// Open `url` in a new tab/window/app. Whether that actually worked is not our problem.
	fn open_link(&self, url: &str);
	fn write_clipboard(&self, text: &str);
}

/// Identifies a single press of the copy button, so that only the most recent press's timer gets
/// to take the check mark down again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AckToken(pub u128);

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFlow<H> {
	host: H,
	selected: Option<&'static TicketOption>,
	size: ShirtSize,
	dialog_open: bool,
	copied: Option<AckToken>
}

impl<H: Host> CheckoutFlow<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			selected: None,
			size: ShirtSize::default(),
			dialog_open: false,
			copied: None
		}
	}

	pub fn select_option(&mut self, option: &'static TicketOption) {
		self.selected = Some(option);
		self.dialog_open = true;
	}

	pub fn set_size(&mut self, size: ShirtSize) {
		self.size = size;
	}

	/// Dismiss the dialog without buying anything. Whatever was picked is forgotten.
	pub fn close(&mut self) {
		self.dialog_open = false;
		self.selected = None;
		self.size = ShirtSize::default();
	}

	/// What `confirm` would send if it were called at `at`
	#[must_use]
	pub fn preview(&self, at: NaiveDateTime) -> Option<Receipt<'static>> {
		self.selected.map(|option| Receipt::new(option, self.size, at))
	}

	/// Builds the receipt, hands the WhatsApp link to the host, and closes the dialog. Returns the
	/// link that was opened, or `None` (having done nothing at all) if nothing was selected.
	pub fn confirm(&mut self) -> Option<String> {
		let receipt = self.preview(self.host.now())?;
		let url = receipt.whatsapp_url();

		self.host.open_link(&url);
		self.close();

		Some(url)
	}

	pub fn copy_payment_reference(&mut self, token: AckToken) {
		self.host.write_clipboard(PIX_KEY);
		self.copied = Some(token);
	}

	/// Called once `COPY_ACK_DURATION` has passed since the copy that produced `token`. If the key
	/// has been copied again since then, this does nothing and returns false.
	pub fn clear_copied(&mut self, token: AckToken) -> bool {
		if self.copied == Some(token) {
			self.copied = None;
			true
		} else {
			false
		}
	}

	#[must_use]
	pub fn selected(&self) -> Option<&'static TicketOption> {
		self.selected
	}

	#[must_use]
	pub fn size(&self) -> ShirtSize {
		self.size
	}

	#[must_use]
	pub fn is_dialog_open(&self) -> bool {
		self.dialog_open
	}

	#[must_use]
	pub fn is_copied(&self) -> bool {
		self.copied.is_some()
	}

	#[must_use]
	pub fn host(&self) -> &H {
		&self.host
	}
}
