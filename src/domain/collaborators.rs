//! Capability traits for the host-platform collaborators.
//!
//! The statistics service links back into the host site (newsletter previews,
//! store order admin screens) and renders store prices, but owns neither
//! concern. Both are represented as narrow injectable traits so response
//! shaping stays unit-testable without the host platform.
//!
//! Implementations live in [`crate::infrastructure::site`].

use crate::domain::entities::SendQueue;

/// Send-queue argument for preview link construction.
///
/// Three states, deliberately kept distinct:
/// - [`Queue`](QueueRef::Queue) - anchor the preview to a concrete sending run
/// - [`Missing`](QueueRef::Missing) - the newsletter is in a sent state but no
///   queue row was loaded
/// - [`NoContext`](QueueRef::NoContext) - the newsletter has no send context
///   at all; build a generic preview link
#[derive(Debug, Clone, Copy)]
pub enum QueueRef<'a> {
    Queue(&'a SendQueue),
    Missing,
    NoContext,
}

/// Builds URLs that point back into the host site.
pub trait LinkResolver: Send + Sync {
    /// "View in browser" URL for a newsletter.
    ///
    /// `tracking` carries a subscriber id when the link should be
    /// subscriber-tracked; `None` builds an untracked link.
    ///
    /// Returns `None` only when no link can be produced for the newsletter.
    fn view_in_browser_url(
        &self,
        newsletter_id: i64,
        hash: &str,
        tracking: Option<i64>,
        queue: QueueRef<'_>,
    ) -> Option<String>;

    /// Admin edit URL for a store order.
    ///
    /// `context` selects the argument separator convention of the host
    /// site's edit-link helper (`"display"` emits HTML-escaped separators).
    fn order_edit_url(&self, order_id: i64, context: &str) -> Option<String>;
}

/// Renders raw price strings for store order totals.
pub trait PriceFormatter: Send + Sync {
    /// Formats `amount` in the given ISO 4217 currency code.
    fn raw_price(&self, amount: f64, currency: &str) -> String;
}
