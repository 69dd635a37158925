pub mod auth;
pub mod errors;
pub mod oauth;
pub mod routes;
pub mod secret;
pub mod server;
pub mod utils;

use crate::{api, repo};

pub struct AppState {
    pub repo: repo::ImplAppRepo,
    pub handshake_verifier: api::webhook::HandshakeVerifier,
    pub facebook_oauth: oauth::FacebookOauthClient,
}
