use ntex::web;

use crate::front::{AppState, oauth, utils};

/// Redirects the browser to the Facebook Login dialog so the user can grant
/// the app access to their pages and lead forms
#[web::get("/auth/facebook")]
pub async fn facebook_login(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let (auth_url, _csrf_state) = oauth::get_new_auth_url(&app_state.facebook_oauth);

    utils::redirect_to(auth_url.as_str())
}
