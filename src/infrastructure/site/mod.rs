//! Host-site integrations.
//!
//! Concrete implementations of the domain collaborator traits: URL
//! construction against the configured site and store price rendering.

pub mod links;
pub mod prices;

pub use links::SiteLinkResolver;
pub use prices::StorePriceFormatter;
