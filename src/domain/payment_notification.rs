use std::fmt;

use serde_json::{Map, Number, Value};

/// Ordered list of payload keys tried for one canonical field, with the value
/// used when none of them is present.
struct FieldExtractor {
	keys:    &'static [&'static str],
	default: &'static str,
}

impl FieldExtractor {
	const fn new(keys: &'static [&'static str], default: &'static str) -> Self {
		Self { keys, default }
	}

	fn first_present(&self, payload: &Map<String, Value>) -> Option<String> {
		self.keys
			.iter()
			.filter_map(|key| payload.get(*key))
			.find(|value| is_present(value))
			.map(render)
	}

	fn extract(&self, payload: &Map<String, Value>) -> String {
		self.first_present(payload)
			.unwrap_or_else(|| self.default.to_string())
	}
}

const EVENT: FieldExtractor =
	FieldExtractor::new(&["event", "type"], "incoming_payment");
const TRANSACTION_ID: FieldExtractor =
	FieldExtractor::new(&["tx_id", "transactionId", "id"], "unknown");
const ACCOUNT: FieldExtractor =
	FieldExtractor::new(&["destination_iban", "iban", "account"], "unknown");
const AMOUNT: FieldExtractor = FieldExtractor::new(&["amount", "value"], "0");
const CURRENCY: FieldExtractor = FieldExtractor::new(&["currency"], "TRY");
const REFERENCE: FieldExtractor =
	FieldExtractor::new(&["reference", "description"], "");

/// Providers send `null`, `false`, `""` or `0` for fields they do not fill in,
/// so those fall through to the next key in the chain.
fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::String(s) => !s.is_empty(),
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Largest magnitude at which every integer is exactly representable in an
/// `f64` (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn render(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Number(n) => render_number(n),
		other => other.to_string(),
	}
}

/// Integral floats such as `100.0` or `1e3` print without a fraction, the way
/// providers' own dashboards show them.
fn render_number(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => {
			format!("{}", f as i64)
		}
		_ => n.to_string(),
	}
}

/// Canonical view of a provider payment webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentNotification {
	pub event:          String,
	pub transaction_id: String,
	pub account:        String,
	pub amount:         String,
	pub currency:       String,
	pub reference:      Option<String>,
}

impl PaymentNotification {
	/// Builds the record from any JSON value. Anything other than an object
	/// carries no recognizable fields and yields the defaults.
	pub fn from_payload(payload: &Value) -> Self {
		match payload {
			Value::Object(fields) => Self::from_fields(fields),
			_ => Self::from_fields(&Map::new()),
		}
	}

	pub fn from_fields(fields: &Map<String, Value>) -> Self {
		Self {
			event:          EVENT.extract(fields),
			transaction_id: TRANSACTION_ID.extract(fields),
			account:        ACCOUNT.extract(fields),
			amount:         AMOUNT.extract(fields),
			currency:       CURRENCY.extract(fields),
			reference:      REFERENCE.first_present(fields),
		}
	}

	pub fn to_message(&self) -> NotificationMessage {
		let mut text = format!(
			"💸 Gelen Ödeme\n• Tutar: {} {}\n• IBAN: {}\n",
			self.amount, self.currency, self.account
		);
		if let Some(reference) = &self.reference {
			text.push_str(&format!("• Ref: {reference}\n"));
		}
		text.push_str(&format!("• TX: {}", self.transaction_id));

		NotificationMessage(text)
	}
}

/// Human readable text sent to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage(String);

impl NotificationMessage {
	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Display for NotificationMessage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
