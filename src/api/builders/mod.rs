//! Response builders translating domain aggregates into API DTOs.
//!
//! Builders are pure mapping components; the only collaborators they touch
//! are the injected link and price capability traits.

pub mod subscriber_stats;

pub use subscriber_stats::SubscriberStatsResponseBuilder;
