//! Facebook webhook subscription handshake.
//!
//! When a webhook subscription is registered, Facebook sends a GET request with
//! `hub.mode=subscribe`, the shared `hub.verify_token` and a `hub.challenge`
//! value that must be echoed back verbatim.

use crate::{consts, metric};
use subtle::ConstantTimeEq;

/// Verifies subscription handshakes against the configured verify token.
#[derive(Clone)]
pub struct HandshakeVerifier {
    verify_token: String,
}

impl HandshakeVerifier {
    pub fn new(verify_token: impl Into<String>) -> Self {
        Self {
            verify_token: verify_token.into(),
        }
    }

    /// Returns the challenge to echo back when `mode` is `subscribe` and
    /// `token` matches the configured verify token, `None` otherwise.
    ///
    /// Both checks always run and the token comparison is constant-time, so
    /// callers can't tell which one failed. An empty configured token never
    /// verifies.
    pub fn verify(
        &self,
        mode: Option<&str>,
        token: Option<&str>,
        challenge: Option<&str>,
    ) -> Option<String> {
        let mode_ok = mode
            .unwrap_or_default()
            .as_bytes()
            .ct_eq(consts::HUB_MODE_SUBSCRIBE.as_bytes());
        let token_ok = token
            .unwrap_or_default()
            .as_bytes()
            .ct_eq(self.verify_token.as_bytes());
        let configured = !self.verify_token.is_empty();

        if bool::from(mode_ok & token_ok) && configured {
            metric::incr_handshake_statds("verified");
            return Some(challenge.unwrap_or_default().to_string());
        }

        metric::incr_handshake_statds("rejected");
        None
    }
}
