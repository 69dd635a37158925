//! Maintenance cli for the crm hooks database: migrations and user/secret
//! administration.

pub mod action;
pub mod config;
pub mod utils;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    action::AppArgs::parse().run().await
}
