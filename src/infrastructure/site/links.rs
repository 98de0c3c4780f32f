//! Link construction against the host site.

use url::Url;

use crate::domain::collaborators::{LinkResolver, QueueRef};

/// Errors raised while validating the configured site URL.
#[derive(Debug, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid site URL: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Site URL must be a hierarchical http(s) URL")]
    NotABase,
}

/// Builds newsletter preview and order-edit URLs from the site base URL.
///
/// The base URL is validated once at startup; request-time construction
/// cannot fail on it afterwards.
pub struct SiteLinkResolver {
    base: Url,
}

impl SiteLinkResolver {
    /// Creates a resolver for the given site base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SiteUrlError`] when the URL is malformed or not a
    /// hierarchical http(s) URL.
    pub fn new(site_url: &str) -> Result<Self, SiteUrlError> {
        let mut base = Url::parse(site_url)?;
        if base.cannot_be_a_base() {
            return Err(SiteUrlError::NotABase);
        }

        // Anchor relative joins at the site root.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self { base })
    }
}

impl LinkResolver for SiteLinkResolver {
    fn view_in_browser_url(
        &self,
        newsletter_id: i64,
        hash: &str,
        tracking: Option<i64>,
        queue: QueueRef<'_>,
    ) -> Option<String> {
        let mut url = self.base.join("newsletter/preview").ok()?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("id", &newsletter_id.to_string());
            query.append_pair("hash", hash);

            if let Some(subscriber_id) = tracking {
                query.append_pair("subscriber", &subscriber_id.to_string());
            }

            // Only a concrete sending run anchors the preview; both the
            // missing-queue and no-context signals produce a generic link.
            if let QueueRef::Queue(send_queue) = queue {
                query.append_pair("queue", &send_queue.id.to_string());
            }
        }

        Some(url.into())
    }

    fn order_edit_url(&self, order_id: i64, context: &str) -> Option<String> {
        let url = self.base.join("wp-admin/post.php").ok()?;

        // The "display" context HTML-escapes the argument separator, every
        // other context uses a plain ampersand.
        let separator = if context == "display" { "&amp;" } else { "&" };

        Some(format!("{url}?post={order_id}{separator}action=edit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SendQueue;

    fn resolver() -> SiteLinkResolver {
        SiteLinkResolver::new("https://news.example.com").unwrap()
    }

    #[test]
    fn test_rejects_malformed_site_url() {
        assert!(SiteLinkResolver::new("not a url").is_err());
        assert!(matches!(
            SiteLinkResolver::new("mailto:hi@example.com"),
            Err(SiteUrlError::NotABase)
        ));
    }

    #[test]
    fn test_generic_preview_url_without_send_context() {
        let url = resolver()
            .view_in_browser_url(5, "abc", None, QueueRef::NoContext)
            .unwrap();

        assert_eq!(
            url,
            "https://news.example.com/newsletter/preview?id=5&hash=abc"
        );
    }

    #[test]
    fn test_missing_queue_also_builds_generic_preview_url() {
        let url = resolver()
            .view_in_browser_url(5, "abc", None, QueueRef::Missing)
            .unwrap();

        assert_eq!(
            url,
            "https://news.example.com/newsletter/preview?id=5&hash=abc"
        );
    }

    #[test]
    fn test_preview_url_anchored_to_sending_run() {
        let queue = SendQueue {
            id: 12,
            newsletter_id: 5,
        };
        let url = resolver()
            .view_in_browser_url(5, "abc", None, QueueRef::Queue(&queue))
            .unwrap();

        assert_eq!(
            url,
            "https://news.example.com/newsletter/preview?id=5&hash=abc&queue=12"
        );
    }

    #[test]
    fn test_tracked_preview_url_carries_subscriber() {
        let url = resolver()
            .view_in_browser_url(5, "abc", Some(42), QueueRef::NoContext)
            .unwrap();

        assert_eq!(
            url,
            "https://news.example.com/newsletter/preview?id=5&hash=abc&subscriber=42"
        );
    }

    #[test]
    fn test_order_edit_url_uses_plain_separator_for_code_context() {
        let url = resolver().order_edit_url(1001, "code").unwrap();
        assert_eq!(
            url,
            "https://news.example.com/wp-admin/post.php?post=1001&action=edit"
        );
    }

    #[test]
    fn test_order_edit_url_escapes_separator_for_display_context() {
        let url = resolver().order_edit_url(1001, "display").unwrap();
        assert_eq!(
            url,
            "https://news.example.com/wp-admin/post.php?post=1001&amp;action=edit"
        );
    }

    #[test]
    fn test_base_url_with_path_keeps_prefix() {
        let resolver = SiteLinkResolver::new("https://example.com/blog").unwrap();
        let url = resolver
            .view_in_browser_url(1, "h", None, QueueRef::NoContext)
            .unwrap();

        assert_eq!(url, "https://example.com/blog/newsletter/preview?id=1&hash=h");
    }
}
