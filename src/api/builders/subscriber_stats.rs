//! Response builder for per-subscriber engagement statistics.
//!
//! A pure, single-pass mapping from pre-fetched [`SubscriberNewsletterStats`]
//! aggregates to the flat JSON shape served by the API. No filtering, no
//! sorting, no deduplication; missing optional fields degrade to null.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::dto::subscriber_stats::{ActionItem, NewsletterStatsItem, PurchaseItem};
use crate::domain::collaborators::{LinkResolver, PriceFormatter, QueueRef};
use crate::domain::entities::{ClickEvent, Newsletter, NewsletterStatus, OpenEvent, PurchaseAttribution};
use crate::domain::repositories::SubscriberNewsletterStats;

/// Rendering pattern for every `created_at` / `sent_at` field.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Context token passed to the order edit link provider.
const EDIT_LINK_CONTEXT: &str = "code";

/// Shapes engagement aggregates into API response items.
///
/// The two host-platform concerns (link construction, price rendering) are
/// injected as narrow traits, keeping the builder unit-testable without the
/// host site.
pub struct SubscriberStatsResponseBuilder {
    links: Arc<dyn LinkResolver>,
    prices: Arc<dyn PriceFormatter>,
}

impl SubscriberStatsResponseBuilder {
    pub fn new(links: Arc<dyn LinkResolver>, prices: Arc<dyn PriceFormatter>) -> Self {
        Self { links, prices }
    }

    /// Builds one response item per aggregate, in input order.
    ///
    /// Each item's `actions` list holds the open action first (when an open
    /// was recorded), then one click action per click in input order.
    pub fn build(&self, stats: &[SubscriberNewsletterStats]) -> Vec<NewsletterStatsItem> {
        stats
            .iter()
            .map(|entry| {
                let mut item = self.build_newsletter(&entry.newsletter);
                if let Some(open) = &entry.open {
                    item.actions.push(Self::build_open(open));
                }
                for click in &entry.clicks {
                    item.actions.push(self.build_click(click));
                }
                item
            })
            .collect()
    }

    fn build_newsletter(&self, newsletter: &Newsletter) -> NewsletterStatsItem {
        // A concrete sending run anchors the preview only for newsletters
        // that have gone out; everything else gets the explicit
        // no-send-context signal, even when a queue row exists.
        let queue = if matches!(
            newsletter.status,
            NewsletterStatus::Sent | NewsletterStatus::Sending
        ) {
            match &newsletter.latest_queue {
                Some(queue) => QueueRef::Queue(queue),
                None => QueueRef::Missing,
            }
        } else {
            QueueRef::NoContext
        };

        let preview_url =
            self.links
                .view_in_browser_url(newsletter.id, &newsletter.hash, None, queue);

        NewsletterStatsItem {
            id: newsletter.id,
            preview_url,
            subject: newsletter.subject.clone(),
            sent_at: newsletter.sent_at.map(format_timestamp),
            actions: Vec::new(),
        }
    }

    fn build_open(open: &OpenEvent) -> ActionItem {
        ActionItem::Open {
            id: open.id,
            created_at: format_timestamp(open.created_at),
        }
    }

    fn build_click(&self, click: &ClickEvent) -> ActionItem {
        // Clicks on targets outside the newsletter's tracked links report
        // an empty URL.
        let url = click
            .link
            .as_ref()
            .map(|link| link.url.clone())
            .unwrap_or_default();

        ActionItem::Click {
            id: click.id,
            created_at: format_timestamp(click.created_at),
            count: click.count,
            url,
            purchases: click
                .purchases
                .iter()
                .map(|purchase| self.build_purchase(purchase))
                .collect(),
        }
    }

    fn build_purchase(&self, purchase: &PurchaseAttribution) -> PurchaseItem {
        PurchaseItem {
            id: purchase.id,
            created_at: format_timestamp(purchase.created_at),
            order_id: purchase.order_id,
            order_url: self.links.order_edit_url(purchase.order_id, EDIT_LINK_CONTEXT),
            revenue: self
                .prices
                .raw_price(purchase.order_price_total, &purchase.order_currency),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewsletterLink, SendQueue};
    use chrono::TimeZone;
    use serde_json::json;
    use std::sync::Mutex;

    /// Owned summary of the queue argument a resolver call received.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum QueueSignal {
        Queue(i64),
        Missing,
        NoContext,
    }

    /// Link resolver fake that records how it was called.
    struct RecordingResolver {
        preview_calls: Mutex<Vec<(i64, Option<i64>, QueueSignal)>>,
        order_calls: Mutex<Vec<(i64, String)>>,
    }

    impl RecordingResolver {
        fn new() -> Self {
            Self {
                preview_calls: Mutex::new(Vec::new()),
                order_calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl LinkResolver for RecordingResolver {
        fn view_in_browser_url(
            &self,
            newsletter_id: i64,
            _hash: &str,
            tracking: Option<i64>,
            queue: QueueRef<'_>,
        ) -> Option<String> {
            let signal = match queue {
                QueueRef::Queue(queue) => QueueSignal::Queue(queue.id),
                QueueRef::Missing => QueueSignal::Missing,
                QueueRef::NoContext => QueueSignal::NoContext,
            };
            self.preview_calls
                .lock()
                .unwrap()
                .push((newsletter_id, tracking, signal));
            Some(format!("https://example.com/preview/{newsletter_id}"))
        }

        fn order_edit_url(&self, order_id: i64, context: &str) -> Option<String> {
            self.order_calls
                .lock()
                .unwrap()
                .push((order_id, context.to_string()));
            Some(format!("https://example.com/orders/{order_id}/edit"))
        }
    }

    struct FixedPrices;

    impl PriceFormatter for FixedPrices {
        fn raw_price(&self, amount: f64, currency: &str) -> String {
            format!("{amount:.2} {currency}")
        }
    }

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn newsletter(id: i64, status: NewsletterStatus, queue: Option<i64>) -> Newsletter {
        Newsletter::new(
            id,
            format!("hash-{id}"),
            format!("Subject {id}"),
            status,
            None,
            queue.map(|queue_id| SendQueue {
                id: queue_id,
                newsletter_id: id,
            }),
        )
    }

    fn aggregate(
        newsletter: Newsletter,
        open: Option<OpenEvent>,
        clicks: Vec<ClickEvent>,
    ) -> SubscriberNewsletterStats {
        SubscriberNewsletterStats {
            newsletter,
            open,
            clicks,
        }
    }

    fn builder_with(resolver: Arc<RecordingResolver>) -> SubscriberStatsResponseBuilder {
        SubscriberStatsResponseBuilder::new(resolver, Arc::new(FixedPrices))
    }

    #[test]
    fn test_output_length_and_order_match_input() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver);

        let stats = vec![
            aggregate(newsletter(3, NewsletterStatus::Draft, None), None, vec![]),
            aggregate(newsletter(1, NewsletterStatus::Draft, None), None, vec![]),
            aggregate(newsletter(2, NewsletterStatus::Draft, None), None, vec![]),
        ];

        let response = builder.build(&stats);

        assert_eq!(response.len(), 3);
        assert_eq!(response[0].id, 3);
        assert_eq!(response[1].id, 1);
        assert_eq!(response[2].id, 2);
    }

    #[test]
    fn test_empty_input_builds_empty_response() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));
        assert!(builder.build(&[]).is_empty());
    }

    #[test]
    fn test_open_action_precedes_clicks() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let clicks = vec![
            ClickEvent::new(20, timestamp(2026, 3, 1, 9, 0, 0), 1, None, vec![]),
            ClickEvent::new(21, timestamp(2026, 3, 1, 9, 5, 0), 2, None, vec![]),
        ];
        let open = OpenEvent {
            id: 10,
            created_at: timestamp(2026, 3, 1, 8, 0, 0),
        };

        let response = builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            Some(open),
            clicks,
        )]);

        let actions = &response[0].actions;
        assert_eq!(actions.len(), 3);
        assert!(matches!(actions[0], ActionItem::Open { id: 10, .. }));
        assert!(matches!(actions[1], ActionItem::Click { id: 20, .. }));
        assert!(matches!(actions[2], ActionItem::Click { id: 21, .. }));
    }

    #[test]
    fn test_no_open_yields_only_clicks_in_input_order() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let clicks = vec![
            ClickEvent::new(22, timestamp(2026, 3, 2, 9, 0, 0), 1, None, vec![]),
            ClickEvent::new(20, timestamp(2026, 3, 2, 9, 1, 0), 1, None, vec![]),
            ClickEvent::new(21, timestamp(2026, 3, 2, 9, 2, 0), 1, None, vec![]),
        ];

        let response = builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            None,
            clicks,
        )]);

        let actions = &response[0].actions;
        assert_eq!(actions.len(), 3);
        for (action, expected_id) in actions.iter().zip([22, 20, 21]) {
            match action {
                ActionItem::Click { id, .. } => assert_eq!(*id, expected_id),
                ActionItem::Open { .. } => panic!("no open action expected"),
            }
        }
    }

    #[test]
    fn test_click_without_newsletter_link_reports_empty_url() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let clicks = vec![
            ClickEvent::new(
                1,
                timestamp(2026, 3, 1, 9, 0, 0),
                1,
                Some(NewsletterLink {
                    id: 8,
                    newsletter_id: 5,
                    url: "https://shop.example.com/sale".to_string(),
                }),
                vec![],
            ),
            ClickEvent::new(2, timestamp(2026, 3, 1, 9, 1, 0), 1, None, vec![]),
        ];

        let response = builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            None,
            clicks,
        )]);

        match &response[0].actions[0] {
            ActionItem::Click { url, .. } => assert_eq!(url, "https://shop.example.com/sale"),
            other => panic!("unexpected action: {other:?}"),
        }
        match &response[0].actions[1] {
            ActionItem::Click { url, .. } => assert_eq!(url, ""),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_sent_newsletter_anchors_preview_to_latest_queue() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver.clone());

        builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            None,
            vec![],
        )]);

        let calls = resolver.preview_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(5, None, QueueSignal::Queue(12))]);
    }

    #[test]
    fn test_sending_newsletter_without_queue_signals_missing() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver.clone());

        builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sending, None),
            None,
            vec![],
        )]);

        let calls = resolver.preview_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(5, None, QueueSignal::Missing)]);
    }

    #[test]
    fn test_unsent_newsletter_signals_no_context_even_with_queue() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver.clone());

        // A queue row exists (e.g. a scheduled run), but the status keeps
        // the preview generic.
        builder.build(&[
            aggregate(newsletter(5, NewsletterStatus::Draft, Some(12)), None, vec![]),
            aggregate(
                newsletter(6, NewsletterStatus::Scheduled, Some(13)),
                None,
                vec![],
            ),
            aggregate(newsletter(7, NewsletterStatus::Active, Some(14)), None, vec![]),
        ]);

        let calls = resolver.preview_calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[
                (5, None, QueueSignal::NoContext),
                (6, None, QueueSignal::NoContext),
                (7, None, QueueSignal::NoContext),
            ]
        );
    }

    #[test]
    fn test_preview_is_never_subscriber_tracked() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver.clone());

        builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            None,
            vec![],
        )]);

        assert!(resolver
            .preview_calls
            .lock()
            .unwrap()
            .iter()
            .all(|(_, tracking, _)| tracking.is_none()));
    }

    #[test]
    fn test_timestamps_render_as_date_time_pattern() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let mut sent = newsletter(5, NewsletterStatus::Sent, Some(12));
        sent.sent_at = Some(timestamp(2026, 1, 9, 23, 5, 7));
        let open = OpenEvent {
            id: 10,
            created_at: timestamp(2026, 1, 10, 0, 0, 1),
        };

        let response = builder.build(&[aggregate(sent, Some(open), vec![])]);

        assert_eq!(response[0].sent_at.as_deref(), Some("2026-01-09 23:05:07"));
        match &response[0].actions[0] {
            ActionItem::Open { created_at, .. } => assert_eq!(created_at, "2026-01-10 00:00:01"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_never_sent_newsletter_has_null_sent_at() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let response = builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Draft, None),
            None,
            vec![],
        )]);

        assert!(response[0].sent_at.is_none());
    }

    #[test]
    fn test_purchases_use_order_links_and_price_collaborators() {
        let resolver = Arc::new(RecordingResolver::new());
        let builder = builder_with(resolver.clone());

        let purchases = vec![
            PurchaseAttribution {
                id: 70,
                created_at: timestamp(2026, 3, 1, 10, 0, 0),
                order_id: 1001,
                order_price_total: 25.0,
                order_currency: "USD".to_string(),
            },
            PurchaseAttribution {
                id: 71,
                created_at: timestamp(2026, 3, 1, 11, 0, 0),
                order_id: 1002,
                order_price_total: 9.5,
                order_currency: "EUR".to_string(),
            },
        ];
        let click = ClickEvent::new(20, timestamp(2026, 3, 1, 9, 0, 0), 2, None, purchases);

        let response = builder.build(&[aggregate(
            newsletter(5, NewsletterStatus::Sent, Some(12)),
            None,
            vec![click],
        )]);

        match &response[0].actions[0] {
            ActionItem::Click { purchases, .. } => {
                assert_eq!(purchases.len(), 2);
                assert_eq!(purchases[0].order_id, 1001);
                assert_eq!(
                    purchases[0].order_url.as_deref(),
                    Some("https://example.com/orders/1001/edit")
                );
                assert_eq!(purchases[0].revenue, "25.00 USD");
                assert_eq!(purchases[1].revenue, "9.50 EUR");
            }
            other => panic!("unexpected action: {other:?}"),
        }

        let order_calls = resolver.order_calls.lock().unwrap();
        assert_eq!(
            order_calls.as_slice(),
            &[(1001, "code".to_string()), (1002, "code".to_string())]
        );
    }

    #[test]
    fn test_draft_newsletter_with_single_untracked_click() {
        let builder = builder_with(Arc::new(RecordingResolver::new()));

        let click = ClickEvent::new(9, timestamp(2026, 3, 1, 9, 0, 0), 3, None, vec![]);
        let response = builder.build(&[aggregate(
            Newsletter::new(
                5,
                "abc".to_string(),
                "Hello".to_string(),
                NewsletterStatus::Draft,
                None,
                None,
            ),
            None,
            vec![click],
        )]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!([{
                "id": 5,
                "preview_url": "https://example.com/preview/5",
                "subject": "Hello",
                "sent_at": null,
                "actions": [{
                    "type": "click",
                    "id": 9,
                    "created_at": "2026-03-01 09:00:00",
                    "count": 3,
                    "url": "",
                    "purchases": [],
                }],
            }])
        );
    }
}
