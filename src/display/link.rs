//! Link helpers for rendered pages.

/// Placeholder href rendered before client-side mount.
pub const PLACEHOLDER_HREF: &str = "#";

/// Path of the like endpoint for an article.
///
/// Topic and slug are inserted verbatim.
///
/// # Examples
///
/// ```
/// use folio::build_like_api_url;
///
/// assert_eq!(build_like_api_url("react", "my-article"), "/api/posts/react/my-article/like");
/// ```
pub fn build_like_api_url(topic: &str, slug: &str) -> String {
    format!("/api/posts/{topic}/{slug}/like")
}

/// Href for an external link that must not navigate before mount.
///
/// Returns the URL verbatim once `mounted` and the URL is non-empty,
/// otherwise [`PLACEHOLDER_HREF`].
pub fn create_safe_href(mounted: bool, url: Option<&str>) -> String {
    match url {
        Some(url) if mounted && !url.is_empty() => url.to_string(),
        _ => PLACEHOLDER_HREF.to_string(),
    }
}

/// Click guard paired with [`create_safe_href`]: navigation is suppressed
/// only for the placeholder.
#[inline]
pub fn should_prevent_default(href: &str) -> bool {
    href == PLACEHOLDER_HREF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_like_api_url() {
        assert_eq!(
            build_like_api_url("react", "my-article"),
            "/api/posts/react/my-article/like"
        );
        // No validation or encoding
        assert_eq!(build_like_api_url("", ""), "/api/posts///like");
        assert_eq!(
            build_like_api_url("a b", "c/d?e"),
            "/api/posts/a b/c/d?e/like"
        );
    }

    #[test]
    fn test_create_safe_href() {
        for (mounted, url, expected) in [
            (true, Some("https://x.com"), "https://x.com"),
            (false, Some("https://x.com"), "#"),
            (true, Some(""), "#"),
            (true, None, "#"),
            (false, None, "#"),
            (true, Some("  "), "  "),
        ] {
            assert_eq!(
                create_safe_href(mounted, url),
                expected,
                "mounted={mounted} url={url:?}"
            );
        }
    }

    #[test]
    fn test_should_prevent_default() {
        assert!(should_prevent_default("#"));
        assert!(should_prevent_default(&create_safe_href(false, Some("https://x.com"))));
        assert!(!should_prevent_default("https://x.com"));
        assert!(!should_prevent_default("#section"));
        assert!(!should_prevent_default(""));
    }
}
