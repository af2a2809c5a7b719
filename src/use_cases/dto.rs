use actix_web::web::Bytes;

/// A webhook delivery as received: the untouched body and whichever signature
/// header the provider sent.
#[derive(Debug, Clone)]
pub struct RelayWebhookCommand {
	pub body:      Bytes,
	pub signature: Option<String>,
}
