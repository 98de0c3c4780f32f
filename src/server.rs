//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, collaborator wiring, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::persistence::{PgStatsRepository, PgTokenRepository};
use crate::infrastructure::site::{SiteLinkResolver, StorePriceFormatter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Site link resolver and store price formatter
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The configured site URL is invalid
/// - Server bind fails or a runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let links = Arc::new(SiteLinkResolver::new(&config.site_url).context("Invalid SITE_URL")?);
    let prices = Arc::new(StorePriceFormatter::new());

    let pool_arc = Arc::new(pool.clone());
    let stats_repository = Arc::new(PgStatsRepository::new(pool_arc.clone()));
    let token_repository = Arc::new(PgTokenRepository::new(pool_arc));

    let state = AppState::new(
        pool,
        stats_repository,
        token_repository,
        links,
        prices,
        config.token_signing_secret.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
