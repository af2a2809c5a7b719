use std::error::Error;
use std::fmt;

use log::{debug, info};
use serde_json::Value;

use crate::domain::notifier::Notifier;
use crate::domain::payment_notification::PaymentNotification;
use crate::domain::signature::SignatureVerifier;
use crate::use_cases::dto::RelayWebhookCommand;

#[derive(Debug)]
pub enum RelayError {
	InvalidSignature,
	MalformedPayload(serde_json::Error),
	Delivery(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for RelayError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RelayError::InvalidSignature => write!(f, "invalid webhook signature"),
			RelayError::MalformedPayload(e) => {
				write!(f, "webhook body is not valid JSON: {e}")
			}
			RelayError::Delivery(e) => write!(f, "notification delivery failed: {e}"),
		}
	}
}

impl Error for RelayError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			RelayError::InvalidSignature => None,
			RelayError::MalformedPayload(e) => Some(e),
			RelayError::Delivery(e) => Some(e.as_ref()),
		}
	}
}

#[derive(Clone)]
pub struct RelayPaymentNotificationUseCase<N: Notifier> {
	verifier: SignatureVerifier,
	notifier: N,
}

impl<N: Notifier> RelayPaymentNotificationUseCase<N> {
	pub fn new(verifier: SignatureVerifier, notifier: N) -> Self {
		Self { verifier, notifier }
	}

	/// Verifies the delivery, then sends exactly one chat message for it.
	/// Nothing reaches the notifier unless the signature checks out.
	pub async fn execute(
		&self,
		command: RelayWebhookCommand,
	) -> Result<PaymentNotification, RelayError> {
		if !self
			.verifier
			.verify(&command.body, command.signature.as_deref())
		{
			return Err(RelayError::InvalidSignature);
		}

		let payload = parse_payload(&command.body)?;
		let notification = PaymentNotification::from_payload(&payload);
		debug!("Normalized webhook payload: {notification:?}");

		self.notifier
			.notify(&notification.to_message())
			.await
			.map_err(RelayError::Delivery)?;

		info!(
			"Relayed {} notification for transaction {}",
			notification.event, notification.transaction_id
		);
		Ok(notification)
	}
}

fn parse_payload(body: &[u8]) -> Result<Value, RelayError> {
	if body.is_empty() {
		return Ok(Value::Object(Default::default()));
	}
	serde_json::from_slice(body).map_err(RelayError::MalformedPayload)
}
