//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`StatsRepository`] - Subscriber engagement statistics (read-only)
//! - [`TokenRepository`] - API token authentication

pub mod stats_repository;
pub mod token_repository;

pub use stats_repository::{StatsRepository, SubscriberNewsletterStats};
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
