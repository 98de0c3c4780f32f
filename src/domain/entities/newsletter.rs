//! Newsletter entity and its sending lifecycle.

use chrono::{DateTime, Utc};

/// Lifecycle status of a newsletter.
///
/// Preview links are anchored to a concrete sending run only for the
/// `Sent` and `Sending` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterStatus {
    Draft,
    Scheduled,
    Sending,
    Sent,
    Active,
}

impl NewsletterStatus {
    /// Parses a status stored in the database.
    ///
    /// Unknown values degrade to `Draft` (treated as never sent) rather
    /// than failing the request.
    pub fn from_db(value: &str) -> Self {
        match value {
            "scheduled" => Self::Scheduled,
            "sending" => Self::Sending,
            "sent" => Self::Sent,
            "active" => Self::Active,
            _ => Self::Draft,
        }
    }
}

/// A single sending run of a newsletter.
///
/// The most recent run per newsletter is the "latest queue" used to anchor
/// preview links for newsletters that have gone out.
#[derive(Debug, Clone)]
pub struct SendQueue {
    pub id: i64,
    pub newsletter_id: i64,
}

/// A newsletter as seen by the statistics API.
///
/// Read-only view; statistics never mutate newsletters.
#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: i64,
    pub hash: String,
    pub subject: String,
    pub status: NewsletterStatus,
    pub sent_at: Option<DateTime<Utc>>,
    /// Most recent sending run, when one exists.
    pub latest_queue: Option<SendQueue>,
}

impl Newsletter {
    pub fn new(
        id: i64,
        hash: String,
        subject: String,
        status: NewsletterStatus,
        sent_at: Option<DateTime<Utc>>,
        latest_queue: Option<SendQueue>,
    ) -> Self {
        Self {
            id,
            hash,
            subject,
            status,
            sent_at,
            latest_queue,
        }
    }
}
