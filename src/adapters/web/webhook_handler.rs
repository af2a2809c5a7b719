use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::SIGNATURE_HEADERS;
use crate::domain::notifier::Notifier;
use crate::use_cases::dto::RelayWebhookCommand;
use crate::use_cases::relay_payment_notification::{
	RelayError, RelayPaymentNotificationUseCase,
};

/// `POST /webhook`. Registered per notifier type through
/// [`crate::adapters::web::routes`].
pub async fn webhook<N: Notifier>(
	req: HttpRequest,
	body: web::Bytes,
	relay_use_case: web::Data<RelayPaymentNotificationUseCase<N>>,
) -> Result<HttpResponse, ApiError> {
	let command = RelayWebhookCommand {
		signature: signature_header(&req),
		body,
	};

	match relay_use_case.execute(command).await {
		Ok(_) => Ok(HttpResponse::Ok().body("ok")),
		Err(e @ RelayError::InvalidSignature) => {
			warn!("Rejected webhook from {:?}: {e}", req.peer_addr());
			Err(e.into())
		}
		Err(e) => {
			error!("webhook error: {e}");
			Err(e.into())
		}
	}
}

fn signature_header(req: &HttpRequest) -> Option<String> {
	SIGNATURE_HEADERS
		.iter()
		.filter_map(|name| req.headers().get(*name))
		.filter_map(|value| value.to_str().ok())
		.find(|value| !value.is_empty())
		.map(str::to_owned)
}
