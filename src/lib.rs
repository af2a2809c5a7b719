use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::{info, warn};
use reqwest::Client;

use crate::domain::signature::SignatureVerifier;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::notification::telegram_notifier::TelegramNotifier;
use crate::use_cases::relay_payment_notification::RelayPaymentNotificationUseCase;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client = Client::builder()
		.timeout(Duration::from_secs(config.notify_timeout_secs))
		.build()
		.map_err(std::io::Error::other)?;

	let notifier = TelegramNotifier::from_config(http_client, &config);
	if !notifier.is_enabled() {
		warn!("BOT_TOKEN and CHAT_ID are not set, notifications are disabled");
	}

	let relay_use_case = RelayPaymentNotificationUseCase::new(
		SignatureVerifier::new(&config.webhook_secret),
		notifier,
	);

	info!("FAST webhook listener running on 0.0.0.0:{}", config.port);
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(relay_use_case.clone()))
			.configure(adapters::web::routes::<TelegramNotifier>)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.port))?
	.run()
	.await
}
