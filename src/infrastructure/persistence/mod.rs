//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgStatsRepository`] - Engagement statistics queries
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_stats_repository;
pub mod pg_token_repository;

pub use pg_stats_repository::PgStatsRepository;
pub use pg_token_repository::PgTokenRepository;
