//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`facebook`] - Facebook Leads webhook subscription and event receiver

pub mod facebook;
pub mod routes;
