//! Facebook webhook endpoint handlers
//!
//! Implements both the subscription verification endpoint (GET) and the event
//! receiver (POST) Facebook calls for page `leadgen` notifications.

use crate::front::{AppState, errors};
use ntex::{util::Bytes, web};
use oauth2::url::form_urlencoded;
use serde::Deserialize;

/// Query parameters for webhook verification.
///
/// Every field is optional so an incomplete handshake is rejected with a 403
/// rather than failing query extraction.
#[derive(Debug, Default)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    pub mode: Option<String>,
    /// The verification token configured in the Facebook app dashboard
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    pub challenge: Option<String>,
}

impl VerifyQuery {
    /// Reads the `hub.*` parameters from a raw query string. The first
    /// occurrence of a repeated key wins and unknown keys are ignored.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "hub.mode" => &mut params.mode,
                "hub.verify_token" => &mut params.verify_token,
                "hub.challenge" => &mut params.challenge,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }

        params
    }
}

/// Top level fields of a notification, only used for logging
#[derive(Debug, Deserialize)]
struct EventSummary {
    #[serde(default)]
    object: String,
    #[serde(default)]
    entry: Vec<serde_json::Value>,
}

/// Webhook verification endpoint (GET)
///
/// # Returns
/// - 200 with the challenge as plain text if verification succeeds
/// - 403 `Forbidden` otherwise
#[web::get("")]
pub async fn verify(
    req: web::HttpRequest,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let query = VerifyQuery::from_query_string(req.query_string());
    let challenge = app_state
        .handshake_verifier
        .verify(
            query.mode.as_deref(),
            query.verify_token.as_deref(),
            query.challenge.as_deref(),
        )
        .ok_or(errors::ApiError::Forbidden)?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(challenge))
}

/// Webhook receiver endpoint (POST)
///
/// Acknowledges every notification whatever its body. Notifications are not
/// stored or linked to a user yet.
#[web::post("")]
pub async fn receive(body: Bytes) -> Result<impl web::Responder, web::Error> {
    let _span = logfire::span!("facebook_webhook").entered();

    match serde_json::from_slice::<EventSummary>(&body) {
        Ok(event) => tracing::info!(
            "Received webhook: object={}, entries={}",
            event.object,
            event.entry.len()
        ),
        Err(e) => tracing::warn!("Received webhook with unexpected body: {e}"),
    }

    Ok(web::HttpResponse::Ok().json(&serde_json::json!({
        "success": true
    })))
}
