//! Webhook secret endpoints
//!
//! - `GET /secret?userId=<id>` returns the user's secret, creating it on first
//!   access
//! - `POST /secret/regenerate` with `{"userId": "<id>"}` rotates it

use ntex::{util::Bytes, web};
use serde::Serialize;

use crate::{
    api,
    front::{AppState, errors, utils::UserIdParam},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSecretResponse {
    pub webhook_secret: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegeneratedSecretResponse {
    pub new_secret: String,
}

#[web::get("")]
pub async fn get_webhook_secret(
    query: web::types::Query<UserIdParam>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let user_id = query.value().ok_or(errors::ApiError::UserIdRequired)?;

    let webhook_secret = api::secret::get_or_create_webhook_secret(&app_state.repo, user_id)
        .await
        .map_err(|e| {
            errors::ApiError::InternalServerError(format!(
                "at get webhook secret for user {user_id}: {e}"
            ))
        })?
        .ok_or(errors::ApiError::UserNotFound)?;

    Ok(web::HttpResponse::Ok().json(&WebhookSecretResponse { webhook_secret }))
}

#[web::post("/regenerate")]
pub async fn regenerate_webhook_secret(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let params = UserIdParam::from_json_body(&body);
    let user_id = params.value().ok_or(errors::ApiError::UserIdRequired)?;

    let new_secret = api::secret::regenerate_webhook_secret(&app_state.repo, user_id)
        .await
        .map_err(|e| {
            errors::ApiError::InternalServerError(format!(
                "at regenerate webhook secret for user {user_id}: {e}"
            ))
        })?;

    tracing::info!("webhook secret regenerated for user {user_id}");

    Ok(web::HttpResponse::Ok().json(&RegeneratedSecretResponse { new_secret }))
}
