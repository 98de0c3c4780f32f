//! DTOs for per-subscriber engagement statistics.

use serde::Serialize;

/// One newsletter with the subscriber's actions against it.
///
/// `preview_url` and `sent_at` are null (not omitted) when absent; API
/// consumers rely on the fields being present.
#[derive(Debug, Serialize)]
pub struct NewsletterStatsItem {
    pub id: i64,
    pub preview_url: Option<String>,
    pub subject: String,
    pub sent_at: Option<String>,
    pub actions: Vec<ActionItem>,
}

/// A single subscriber action, tagged by kind.
///
/// Serializes with a `type` discriminant of `"open"` or `"click"`; an open
/// for a newsletter always precedes its clicks in the `actions` list.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionItem {
    Open {
        id: i64,
        created_at: String,
    },
    Click {
        id: i64,
        created_at: String,
        count: i64,
        url: String,
        purchases: Vec<PurchaseItem>,
    },
}

/// A store order attributed to a click.
#[derive(Debug, Serialize)]
pub struct PurchaseItem {
    pub id: i64,
    pub created_at: String,
    pub order_id: i64,
    pub order_url: Option<String>,
    pub revenue: String,
}
