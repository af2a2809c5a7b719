use config::{ConfigError, Environment};
use serde::Deserialize;

/// Value shipped in deployment templates. A relay still using it would accept
/// webhooks signed by anyone who has seen the template.
pub const PLACEHOLDER_WEBHOOK_SECRET: &str = "replace_me";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SERVER_KEEPALIVE: u64 = 75;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub port:                u16,
	pub bot_token:           Option<String>,
	pub chat_id:             Option<String>,
	pub webhook_secret:      String,
	pub telegram_api_url:    String,
	pub notify_timeout_secs: u64,
	pub server_keepalive:    u64,
}

impl Config {
	pub fn load() -> Result<Self, ConfigError> {
		Self::from_env(Environment::default())
	}

	pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
		let config: Config = config::Config::builder()
			.set_default("port", i64::from(DEFAULT_PORT))?
			.set_default("webhook_secret", PLACEHOLDER_WEBHOOK_SECRET)?
			.set_default("telegram_api_url", DEFAULT_TELEGRAM_API_URL)?
			.set_default("notify_timeout_secs", DEFAULT_NOTIFY_TIMEOUT_SECS as i64)?
			.set_default("server_keepalive", DEFAULT_SERVER_KEEPALIVE as i64)?
			.add_source(environment)
			.build()?
			.try_deserialize()?;

		config.validate()?;
		Ok(config)
	}

	/// Bot token and chat id, when both are set. Without them nothing is
	/// sent to the chat.
	pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
		match (non_empty(&self.bot_token), non_empty(&self.chat_id)) {
			(Some(token), Some(chat_id)) => Some((token, chat_id)),
			_ => None,
		}
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.webhook_secret.is_empty() ||
			self.webhook_secret == PLACEHOLDER_WEBHOOK_SECRET
		{
			return Err(ConfigError::Message(
				"WEBHOOK_SECRET must be set to the secret shared with the \
				 payment provider"
					.to_string(),
			));
		}

		match (non_empty(&self.bot_token), non_empty(&self.chat_id)) {
			(Some(_), None) => Err(ConfigError::Message(
				"BOT_TOKEN is set but CHAT_ID is missing".to_string(),
			)),
			(None, Some(_)) => Err(ConfigError::Message(
				"CHAT_ID is set but BOT_TOKEN is missing".to_string(),
			)),
			_ => Ok(()),
		}
	}
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}
