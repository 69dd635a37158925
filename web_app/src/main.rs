#![recursion_limit = "256"]
//! # CRM Hooks
//!
//! Facebook Leads integration endpoints for the CRM: webhook subscription
//! handshake, event receipt and per-user webhook secrets.

pub mod api;
pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod metric;
pub mod models;
pub mod repo;
pub mod utils;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use logfire::config::MetricsOptions;
use ntex::web;
use ntex_cors::Cors;
use openssl::ssl::{SslAcceptor, SslFiletype, SslMethod};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let app_config = config::AppConfig::init_from_env()
        .context("failed to load app config, check environment variables")?;

    // Initialize logging and metrics
    let shutdown_handler = match &app_config.logfire_token {
        Some(token) => Some(
            logfire::configure()
                .install_panic_handler()
                .with_metrics(Some(MetricsOptions::default()))
                .send_to_logfire(logfire::config::SendToLogfire::Yes)
                .with_token(token)
                .finish()?,
        ),
        None => {
            logger::setup_simple_logger()?;
            None
        }
    };

    // Initialize database connection pool
    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool(&app_config).await?,
    };

    let facebook_oauth = front::oauth::build_facebook_oauth_client(&app_config)?;

    configure_and_run_server(app_config, sqlite_repo, facebook_oauth).await?;

    if let Some(shutdown_handler) = shutdown_handler {
        shutdown_handler.shutdown()?;
    }

    Ok(())
}

/// Configures SSL acceptor for production environments
fn setup_ssl_acceptor(
    app_config: &config::AppConfig,
) -> anyhow::Result<openssl::ssl::SslAcceptorBuilder> {
    let mut ssl_acceptor = SslAcceptor::mozilla_intermediate(SslMethod::tls_server())
        .map_err(|e| anyhow::anyhow!("Failed to create SSL acceptor: {}", e))?;

    ssl_acceptor
        .set_private_key_file(&app_config.private_key_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load private key from {}: {}",
                app_config.private_key_path,
                e
            )
        })?;

    ssl_acceptor
        .set_certificate_file(&app_config.certificate_path, SslFiletype::PEM)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to load certificate from {}: {}",
                app_config.certificate_path,
                e
            )
        })?;

    Ok(ssl_acceptor)
}

/// Creates application state from the provided services
fn create_app_state(
    app_config: &config::AppConfig,
    sqlite_repo: repo::sqlite::SqlxSqliteRepo,
    facebook_oauth: front::oauth::FacebookOauthClient,
) -> front::AppState {
    front::AppState {
        repo: Box::new(sqlite_repo),
        handshake_verifier: api::webhook::HandshakeVerifier::new(
            app_config.fb_verify_token.clone(),
        ),
        facebook_oauth,
    }
}

/// Configures and starts the web server with appropriate SSL settings
async fn configure_and_run_server(
    app_config: config::AppConfig,
    sqlite_repo: repo::sqlite::SqlxSqliteRepo,
    facebook_oauth: front::oauth::FacebookOauthClient,
) -> anyhow::Result<()> {
    let server_addr = ("0.0.0.0", app_config.web_server_port);
    let app_origin = app_config.base_url();
    let is_prod = app_config.is_prod();
    let ssl_acceptor = if is_prod {
        Some(setup_ssl_acceptor(&app_config)?)
    } else {
        None
    };

    let server = web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS"])
                    .allowed_origin(&app_origin)
                    .allowed_origin("https://www.facebook.com")
                    .allowed_origin("https://graph.facebook.com")
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(
                &app_config,
                sqlite_repo.clone(),
                facebook_oauth.clone(),
            ))
            .configure(webhook::routes::facebook)
            .configure(front::routes::secrets)
            .configure(front::routes::facebook_auth)
            .default_service(web::route().to(front::server::serve_not_found))
    });

    let bound_server = match ssl_acceptor {
        Some(ssl_acceptor) => server.bind_openssl(server_addr, ssl_acceptor)?,
        None => server.bind(server_addr)?,
    };

    bound_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
