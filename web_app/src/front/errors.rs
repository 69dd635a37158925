use crate::consts;
use derive_more::{Display, Error};
use log::{error, warn};
use ntex::{http, web};
use serde_json::json;

#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// Webhook handshake mismatch. Expected traffic, never logged.
    #[display("Forbidden")]
    Forbidden,
    #[display("User ID required")]
    UserIdRequired,
    #[display("User not found")]
    UserNotFound,
    #[display("Not found")]
    UrlNotFound,
    #[display("Internal server error")]
    InternalServerError(#[error(not(source))] String),
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        match self {
            ApiError::Forbidden => {
                return web::HttpResponse::build(self.status_code())
                    .content_type("text/plain")
                    .body(consts::FORBIDDEN_BODY);
            }
            ApiError::InternalServerError(details) => {
                error!("[InternalServerError] {details}");
            }
            _ => warn!("{}", self),
        }

        web::HttpResponse::build(self.status_code()).json(&json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::Forbidden => http::StatusCode::FORBIDDEN,
            ApiError::UserIdRequired => http::StatusCode::BAD_REQUEST,
            ApiError::UserNotFound | ApiError::UrlNotFound => http::StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
