//! Repository trait for subscriber engagement statistics.

use crate::domain::entities::{ClickEvent, Newsletter, OpenEvent, Subscriber};
use crate::error::AppError;
use async_trait::async_trait;

/// Per-newsletter engagement bundle for one subscriber.
///
/// Combines the newsletter with the subscriber's first open (when one was
/// recorded) and every click, each click carrying its attributed purchases.
#[derive(Debug, Clone)]
pub struct SubscriberNewsletterStats {
    pub newsletter: Newsletter,
    pub open: Option<OpenEvent>,
    pub clicks: Vec<ClickEvent>,
}

/// Repository interface for engagement statistics queries.
///
/// Read-only: statistics are recorded by the host platform; this service
/// only assembles them for reporting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Looks up a subscriber by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Subscriber))` if the subscriber exists
    /// - `Ok(None)` if the subscriber is not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_subscriber(&self, subscriber_id: i64) -> Result<Option<Subscriber>, AppError>;

    /// Retrieves per-newsletter engagement bundles for a subscriber.
    ///
    /// One entry per newsletter the subscriber opened or clicked, with clicks
    /// and their purchases in recording order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn newsletter_stats(
        &self,
        subscriber_id: i64,
    ) -> Result<Vec<SubscriberNewsletterStats>, AppError>;
}
