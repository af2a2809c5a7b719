use actix_web::web;

use crate::domain::notifier::Notifier;

pub mod errors;
pub mod health_handler;
pub mod schema;
pub mod webhook_handler;

/// Mounts the health probe and the webhook receiver. The relay use case for
/// `N` must be registered as app data.
pub fn routes<N: Notifier>(cfg: &mut web::ServiceConfig) {
	cfg.service(health_handler::health).service(
		web::resource("/webhook")
			.route(web::post().to(webhook_handler::webhook::<N>)),
	);
}
