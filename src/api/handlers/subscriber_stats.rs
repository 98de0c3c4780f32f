//! Handler for per-subscriber engagement statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::subscriber_stats::NewsletterStatsItem;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves detailed engagement statistics for a subscriber.
///
/// # Endpoint
///
/// `GET /api/subscribers/{id}/stats`
///
/// # Response
///
/// Returns one item per newsletter the subscriber engaged with, each
/// carrying the subscriber's actions (open first, then clicks with their
/// attributed purchases).
///
/// # Errors
///
/// Returns 404 Not Found if the subscriber doesn't exist.
pub async fn subscriber_stats_handler(
    State(state): State<AppState>,
    Path(subscriber_id): Path<i64>,
) -> Result<Json<Vec<NewsletterStatsItem>>, AppError> {
    let stats = state.stats_service.subscriber_stats(subscriber_id).await?;

    Ok(Json(state.response_builder.build(&stats)))
}
