use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fast_payment_relay::domain::notifier::Notifier;
use fast_payment_relay::domain::payment_notification::NotificationMessage;

/// Keeps every message it is asked to deliver.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
	sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
	pub fn sent(&self) -> Vec<String> {
		self.sent.lock().unwrap().clone()
	}
}

#[async_trait]
impl Notifier for RecordingNotifier {
	async fn notify(
		&self,
		message: &NotificationMessage,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		self.sent.lock().unwrap().push(message.to_string());
		Ok(())
	}
}

/// Fails every delivery, counting the attempts.
#[derive(Clone, Default)]
pub struct FailingNotifier {
	attempts: Arc<Mutex<usize>>,
}

impl FailingNotifier {
	pub fn attempts(&self) -> usize {
		*self.attempts.lock().unwrap()
	}
}

#[async_trait]
impl Notifier for FailingNotifier {
	async fn notify(
		&self,
		_message: &NotificationMessage,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		*self.attempts.lock().unwrap() += 1;
		Err("chat api unreachable".into())
	}
}
