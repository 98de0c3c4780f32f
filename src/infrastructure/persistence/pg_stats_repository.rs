//! PostgreSQL implementation of the statistics repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::domain::entities::{
    ClickEvent, Newsletter, NewsletterLink, NewsletterStatus, OpenEvent, PurchaseAttribution,
    SendQueue, Subscriber,
};
use crate::domain::repositories::{StatsRepository, SubscriberNewsletterStats};
use crate::error::AppError;

/// PostgreSQL repository for subscriber engagement statistics.
///
/// Assembles per-newsletter aggregates in four batched queries (newsletters
/// with their latest sending run, opens, clicks with links, purchases) and
/// stitches them in memory. Newsletters come back most recently sent first;
/// clicks and purchases keep recording order.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn find_subscriber(&self, subscriber_id: i64) -> Result<Option<Subscriber>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, email
            FROM subscribers
            WHERE id = $1
            "#,
        )
        .bind(subscriber_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|row| Subscriber {
            id: row.get("id"),
            email: row.get("email"),
        }))
    }

    async fn newsletter_stats(
        &self,
        subscriber_id: i64,
    ) -> Result<Vec<SubscriberNewsletterStats>, AppError> {
        let newsletter_rows = sqlx::query(
            r#"
            SELECT n.id, n.hash, n.subject, n.status, n.sent_at, q.id AS queue_id
            FROM newsletters n
            LEFT JOIN LATERAL (
                SELECT id
                FROM sending_queues
                WHERE newsletter_id = n.id
                ORDER BY id DESC
                LIMIT 1
            ) q ON TRUE
            WHERE n.id IN (
                SELECT newsletter_id FROM statistics_opens WHERE subscriber_id = $1
                UNION
                SELECT newsletter_id FROM statistics_clicks WHERE subscriber_id = $1
            )
            ORDER BY n.sent_at DESC NULLS LAST, n.id DESC
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        if newsletter_rows.is_empty() {
            return Ok(Vec::new());
        }

        let open_rows = sqlx::query(
            r#"
            SELECT id, newsletter_id, created_at
            FROM statistics_opens
            WHERE subscriber_id = $1
            ORDER BY id
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let click_rows = sqlx::query(
            r#"
            SELECT c.id, c.newsletter_id, c.created_at, c.count,
                   l.id AS link_id, l.newsletter_id AS link_newsletter_id, l.url AS link_url
            FROM statistics_clicks c
            LEFT JOIN newsletter_links l ON l.id = c.link_id
            WHERE c.subscriber_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let purchase_rows = sqlx::query(
            r#"
            SELECT p.id, p.click_id, p.created_at, p.order_id,
                   p.order_currency, p.order_price_total
            FROM purchase_attributions p
            JOIN statistics_clicks c ON c.id = p.click_id
            WHERE c.subscriber_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(subscriber_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        // Purchases grouped per click, in recording order.
        let mut purchases_by_click: HashMap<i64, Vec<PurchaseAttribution>> = HashMap::new();
        for row in purchase_rows {
            let click_id: i64 = row.get("click_id");
            purchases_by_click
                .entry(click_id)
                .or_default()
                .push(PurchaseAttribution {
                    id: row.get("id"),
                    created_at: row.get("created_at"),
                    order_id: row.get("order_id"),
                    order_price_total: row.get("order_price_total"),
                    order_currency: row.get("order_currency"),
                });
        }

        // First recorded open per newsletter.
        let mut open_by_newsletter: HashMap<i64, OpenEvent> = HashMap::new();
        for row in open_rows {
            let newsletter_id: i64 = row.get("newsletter_id");
            open_by_newsletter
                .entry(newsletter_id)
                .or_insert_with(|| OpenEvent {
                    id: row.get("id"),
                    created_at: row.get("created_at"),
                });
        }

        // Clicks grouped per newsletter, in recording order.
        let mut clicks_by_newsletter: HashMap<i64, Vec<ClickEvent>> = HashMap::new();
        for row in click_rows {
            let newsletter_id: i64 = row.get("newsletter_id");
            let click_id: i64 = row.get("id");

            let link = row
                .get::<Option<i64>, _>("link_id")
                .map(|link_id| NewsletterLink {
                    id: link_id,
                    newsletter_id: row.get("link_newsletter_id"),
                    url: row.get("link_url"),
                });

            clicks_by_newsletter
                .entry(newsletter_id)
                .or_default()
                .push(ClickEvent::new(
                    click_id,
                    row.get("created_at"),
                    row.get("count"),
                    link,
                    purchases_by_click.remove(&click_id).unwrap_or_default(),
                ));
        }

        Ok(newsletter_rows
            .into_iter()
            .map(|row| {
                let newsletter = newsletter_from_row(&row);
                let open = open_by_newsletter.remove(&newsletter.id);
                let clicks = clicks_by_newsletter
                    .remove(&newsletter.id)
                    .unwrap_or_default();

                SubscriberNewsletterStats {
                    newsletter,
                    open,
                    clicks,
                }
            })
            .collect())
    }
}

fn newsletter_from_row(row: &PgRow) -> Newsletter {
    let id: i64 = row.get("id");
    let status: String = row.get("status");
    let sent_at: Option<DateTime<Utc>> = row.get("sent_at");

    let latest_queue = row
        .get::<Option<i64>, _>("queue_id")
        .map(|queue_id| SendQueue {
            id: queue_id,
            newsletter_id: id,
        });

    Newsletter::new(
        id,
        row.get("hash"),
        row.get("subject"),
        NewsletterStatus::from_db(&status),
        sent_at,
        latest_queue,
    )
}
