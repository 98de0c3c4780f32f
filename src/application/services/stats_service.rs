//! Subscriber engagement statistics service.

use std::sync::Arc;

use crate::domain::repositories::{StatsRepository, SubscriberNewsletterStats};
use crate::error::AppError;
use serde_json::json;

/// Service for retrieving per-subscriber engagement aggregates.
///
/// Verifies the subscriber exists, then returns one aggregate per newsletter
/// the subscriber engaged with, in repository order. The service performs no
/// shaping; that belongs to the response builder.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves engagement aggregates for a subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no subscriber matches the id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn subscriber_stats(
        &self,
        subscriber_id: i64,
    ) -> Result<Vec<SubscriberNewsletterStats>, AppError> {
        self.repository
            .find_subscriber(subscriber_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Subscriber not found",
                    json!({ "subscriber_id": subscriber_id }),
                )
            })?;

        self.repository.newsletter_stats(subscriber_id).await
    }
}
