//! # Horse Index
//!
//! JSON API of a horse sanctuary: horse profiles and their veterinary
//! history, stored in SQLite.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod logger;
pub mod metric;
pub mod models;
pub mod repo;
pub mod rest;
pub mod utils;

use anyhow::Context;
use logfire::config::MetricsOptions;
use ntex::web;
use ntex_cors::Cors;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    config::init_config()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;

    // Logfire when a token is configured, plain console logging otherwise
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

    if app_config.is_prod() && app_config.db_pass_encrypt.is_none() {
        tracing::warn!("running in prod without DB_PASS_ENCRYPT, the database file is not encrypted");
    }

    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool(app_config).await?,
    };
    sqlite_repo.init_schema().await?;

    configure_and_run_server(app_config, sqlite_repo).await?;

    if let Some(shutdown_handler) = shutdown_handler {
        shutdown_handler.shutdown()?;
    }

    Ok(())
}

fn build_cors(app_config: &config::AppConfig) -> Cors {
    app_config
        .cors_origins()
        .iter()
        .fold(Cors::new(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS", "PUT", "DELETE"])
        .supports_credentials()
}

/// Configures and starts the web server
async fn configure_and_run_server(
    app_config: &'static config::AppConfig,
    sqlite_repo: repo::sqlite::SqlxSqliteRepo,
) -> anyhow::Result<()> {
    let server_addr = (
        app_config.web_server_host.as_str(),
        app_config.web_server_port,
    );

    tracing::info!(
        "listening on {}:{}",
        app_config.web_server_host,
        app_config.web_server_port
    );

    web::server(move || {
        web::App::new()
            .wrap(build_cors(app_config).finish())
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(web::types::PayloadConfig::new(consts::MAX_PAYLOAD_SIZE))
            .state(rest::AppState {
                repo: Box::new(sqlite_repo.clone()),
            })
            .configure(rest::routes::api)
            .default_service(web::route().to(rest::server::serve_not_found))
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
