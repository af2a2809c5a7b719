use async_trait::async_trait;

use crate::domain::payment_notification::NotificationMessage;

#[async_trait]
pub trait Notifier: Send + Sync + 'static {
	async fn notify(
		&self,
		message: &NotificationMessage,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
