use ntex::web;

use crate::consts;

/// Configures the Facebook webhook routes.
///
/// These routes are public endpoints that don't require authentication.
///
/// # Routes
/// - `GET /webhook` - Subscription verification handshake
/// - `POST /webhook` - Event notification receiver
pub fn facebook(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook")
            .state(web::types::PayloadConfig::new(
                consts::WEBHOOK_MAX_PAYLOAD_BYTES,
            ))
            .service((super::facebook::verify, super::facebook::receive)),
    );
}
