//! # API Module
//!
//! Business logic behind the HTTP handlers. Each submodule handles a specific
//! domain of functionality.
//!
//! ## Modules
//!
//! - [`secret`] - Per-user webhook secret issuance and rotation
//! - [`webhook`] - Facebook webhook subscription handshake

pub mod secret;
pub mod webhook;
