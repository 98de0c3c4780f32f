//! Purchase attribution entity.

use chrono::{DateTime, Utc};

/// A store order attributed to a tracked click, used for revenue reporting.
///
/// `order_price_total` is the raw order total in the order's own currency;
/// formatting for display is delegated to the price collaborator.
#[derive(Debug, Clone)]
pub struct PurchaseAttribution {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub order_id: i64,
    pub order_price_total: f64,
    pub order_currency: String,
}
