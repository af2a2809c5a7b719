pub mod telegram_notifier;
