//! Frontend route configuration module.
//!
//! Routes are grouped by functionality into logical scopes.

use super::{auth, secret};
use ntex::web;

/// Configures per-user webhook secret routes.
///
/// # Routes
/// - `GET /secret?userId=<id>` - Fetch (or lazily create) the user's secret
/// - `POST /secret/regenerate` - Rotate the user's secret
pub fn secrets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/secret").service((
        secret::get_webhook_secret,
        secret::regenerate_webhook_secret,
    )));
}

/// Configures the Facebook Login entry point.
///
/// # Routes
/// - `GET /auth/facebook` - Redirect to the Facebook Login dialog
pub fn facebook_auth(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::facebook_login);
}
