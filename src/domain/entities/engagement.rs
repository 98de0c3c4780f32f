//! Engagement events recorded against a newsletter.

use chrono::{DateTime, Utc};

use crate::domain::entities::link::NewsletterLink;
use crate::domain::entities::purchase::PurchaseAttribution;

/// First recorded open of a newsletter by a subscriber.
#[derive(Debug, Clone)]
pub struct OpenEvent {
    pub id: i64,
    pub created_at: DateTime<Utc>,
}

/// A recorded click on a newsletter URL by a subscriber.
///
/// `link` is absent when the clicked target could not be resolved to a
/// tracked newsletter link. `purchases` holds store orders attributed to
/// this click, in attribution order.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub count: i64,
    pub link: Option<NewsletterLink>,
    pub purchases: Vec<PurchaseAttribution>,
}

impl ClickEvent {
    pub fn new(
        id: i64,
        created_at: DateTime<Utc>,
        count: i64,
        link: Option<NewsletterLink>,
        purchases: Vec<PurchaseAttribution>,
    ) -> Self {
        Self {
            id,
            created_at,
            count,
            link,
            purchases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_without_link() {
        let click = ClickEvent::new(9, Utc::now(), 3, None, vec![]);

        assert_eq!(click.id, 9);
        assert_eq!(click.count, 3);
        assert!(click.link.is_none());
        assert!(click.purchases.is_empty());
    }

    #[test]
    fn test_click_with_link_and_purchases() {
        let link = NewsletterLink {
            id: 1,
            newsletter_id: 5,
            url: "https://shop.example.com".to_string(),
        };
        let purchase = PurchaseAttribution {
            id: 7,
            created_at: Utc::now(),
            order_id: 1001,
            order_price_total: 25.0,
            order_currency: "USD".to_string(),
        };

        let click = ClickEvent::new(9, Utc::now(), 1, Some(link), vec![purchase]);

        assert_eq!(click.link.as_ref().unwrap().id, 1);
        assert_eq!(click.purchases.len(), 1);
        assert_eq!(click.purchases[0].order_id, 1001);
    }
}
