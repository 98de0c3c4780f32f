//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::builders::SubscriberStatsResponseBuilder;
use crate::application::services::{AuthService, StatsService};
use crate::domain::collaborators::{LinkResolver, PriceFormatter};
use crate::infrastructure::persistence::{PgStatsRepository, PgTokenRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub stats_service: Arc<StatsService<PgStatsRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
    pub response_builder: Arc<SubscriberStatsResponseBuilder>,
}

impl AppState {
    /// Wires services from their repositories and collaborators.
    pub fn new(
        db: PgPool,
        stats_repository: Arc<PgStatsRepository>,
        token_repository: Arc<PgTokenRepository>,
        links: Arc<dyn LinkResolver>,
        prices: Arc<dyn PriceFormatter>,
        token_signing_secret: String,
    ) -> Self {
        Self {
            db,
            stats_service: Arc::new(StatsService::new(stats_repository)),
            auth_service: Arc::new(AuthService::new(token_repository, token_signing_secret)),
            response_builder: Arc::new(SubscriberStatsResponseBuilder::new(links, prices)),
        }
    }
}
