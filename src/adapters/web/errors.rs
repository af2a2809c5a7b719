use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::use_cases::relay_payment_notification::RelayError;

/// Everything a webhook caller can be told when a request is not accepted.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("invalid signature")]
	InvalidSignature,
	#[display("server error")]
	InternalServerError,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::plaintext())
			.body(self.to_string())
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidSignature => StatusCode::UNAUTHORIZED,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<RelayError> for ApiError {
	fn from(error: RelayError) -> Self {
		match error {
			RelayError::InvalidSignature => ApiError::InvalidSignature,
			RelayError::MalformedPayload(_) | RelayError::Delivery(_) => {
				ApiError::InternalServerError
			}
		}
	}
}
