use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use log::{debug, error};
use reqwest::Client;
use serde::Serialize;

use crate::domain::notifier::Notifier;
use crate::domain::payment_notification::NotificationMessage;
use crate::infrastructure::config::settings::Config;

#[derive(Debug, Display, Error)]
pub enum TelegramError {
	#[display("failed to reach the Telegram API: {source}")]
	Transport { source: reqwest::Error },
	#[display("Telegram API rejected the message with status {status}: {body}")]
	Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
	pub chat_id: &'a str,
	pub text:    &'a str,
}

#[derive(Clone)]
struct BotCredentials {
	token:   String,
	chat_id: String,
}

/// Posts notifications through the Telegram Bot API `sendMessage` method.
///
/// Built without credentials it accepts every message and sends nothing, so a
/// relay can run locally without a bot.
#[derive(Clone)]
pub struct TelegramNotifier {
	http_client: Client,
	api_url:     String,
	credentials: Option<BotCredentials>,
}

impl TelegramNotifier {
	pub fn new(
		http_client: Client,
		api_url: impl Into<String>,
		bot_token: impl Into<String>,
		chat_id: impl Into<String>,
	) -> Self {
		Self {
			http_client,
			api_url: api_url.into(),
			credentials: Some(BotCredentials {
				token:   bot_token.into(),
				chat_id: chat_id.into(),
			}),
		}
	}

	pub fn disabled(http_client: Client) -> Self {
		Self {
			http_client,
			api_url: String::new(),
			credentials: None,
		}
	}

	pub fn from_config(http_client: Client, config: &Config) -> Self {
		match config.telegram_credentials() {
			Some((token, chat_id)) => {
				Self::new(http_client, config.telegram_api_url.clone(), token, chat_id)
			}
			None => Self::disabled(http_client),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.credentials.is_some()
	}

	async fn send_message(
		&self,
		credentials: &BotCredentials,
		text: &str,
	) -> Result<(), TelegramError> {
		let url = format!(
			"{}/bot{}/sendMessage",
			self.api_url.trim_end_matches('/'),
			credentials.token
		);
		let resp = self
			.http_client
			.post(url)
			.json(&SendMessageRequest {
				chat_id: &credentials.chat_id,
				text,
			})
			.send()
			.await
			.map_err(|source| TelegramError::Transport { source })?;

		let status = resp.status();
		if !status.is_success() {
			// A 4xx here is usually permanent (bad token, unknown chat), so the
			// reply is kept for the operator.
			let body = resp.text().await.unwrap_or_default();
			error!("Telegram API returned non-success status {status}: {body}");
			return Err(TelegramError::Rejected {
				status: status.as_u16(),
				body,
			});
		}
		Ok(())
	}
}

#[async_trait]
impl Notifier for TelegramNotifier {
	async fn notify(
		&self,
		message: &NotificationMessage,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let Some(credentials) = &self.credentials else {
			debug!("Telegram credentials not configured, dropping notification");
			return Ok(());
		};

		self.send_message(credentials, message.as_str())
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
	}
}
