//! Newsletter link entity.

/// A tracked URL belonging to a specific newsletter.
///
/// Distinguished from arbitrary external URLs: a click that cannot be tied
/// to a newsletter link reports an empty URL in the API response.
#[derive(Debug, Clone)]
pub struct NewsletterLink {
    pub id: i64,
    pub newsletter_id: i64,
    pub url: String,
}
