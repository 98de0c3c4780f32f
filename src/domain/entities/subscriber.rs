//! Subscriber entity.

/// A mailing list subscriber.
///
/// Only the fields the statistics API needs; subscriber management lives in
/// the host platform.
#[derive(Debug, Clone)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
}
