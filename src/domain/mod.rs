pub mod notifier;
pub mod payment_notification;
pub mod signature;
