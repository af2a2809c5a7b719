pub mod dto;
pub mod relay_payment_notification;
