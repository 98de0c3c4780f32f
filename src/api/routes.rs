//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::subscriber_stats_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET /subscribers/{id}/stats` - Detailed engagement statistics for a subscriber
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/subscribers/{id}/stats", get(subscriber_stats_handler))
}
