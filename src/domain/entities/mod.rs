//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures of the engagement
//! statistics service. Entities are plain data structures without business
//! logic; all of them are read-only, request-scoped views.
//!
//! # Entity Types
//!
//! - [`Newsletter`] - A newsletter with its sending lifecycle
//! - [`SendQueue`] - A single sending run of a newsletter
//! - [`NewsletterLink`] - A tracked URL belonging to a newsletter
//! - [`OpenEvent`] / [`ClickEvent`] - Engagement events for a subscriber
//! - [`PurchaseAttribution`] - A store order attributed to a click
//! - [`Subscriber`] - A mailing list subscriber

pub mod engagement;
pub mod link;
pub mod newsletter;
pub mod purchase;
pub mod subscriber;

pub use engagement::{ClickEvent, OpenEvent};
pub use link::NewsletterLink;
pub use newsletter::{Newsletter, NewsletterStatus, SendQueue};
pub use purchase::PurchaseAttribution;
pub use subscriber::Subscriber;
