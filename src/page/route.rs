//! Page resolution - request path to page identity.
//!
//! The route table is fixed:
//!
//! ```text
//! /            -> home
//! /about       -> about
//! /contact-us  -> contact
//! (anything)   -> not-found
//! ```
//!
//! Matching happens on the normalized [`UrlPath`] and ignores ASCII case,
//! so `/About/` and `/about?x=1` both land on the about page.

use super::PageKey;
use crate::core::UrlPath;

/// Resolve a raw request path (as sent by the browser) to a page.
pub fn resolve(request_path: &str) -> PageKey {
    resolve_url(&UrlPath::from_browser(request_path))
}

/// Resolve a normalized URL path to a page.
pub fn resolve_url(url: &UrlPath) -> PageKey {
    PageKey::ROUTED
        .into_iter()
        .find(|page| {
            page.path()
                .is_some_and(|path| path.eq_ignore_ascii_case(url.as_str()))
        })
        .unwrap_or(PageKey::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(resolve("/"), PageKey::Home);
        assert_eq!(resolve("/about"), PageKey::About);
        assert_eq!(resolve("/contact-us"), PageKey::Contact);
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(resolve("/invalid-route"), PageKey::NotFound);
        assert_eq!(resolve("/contact"), PageKey::NotFound);
        assert_eq!(resolve("/about/team"), PageKey::NotFound);
        assert_eq!(resolve("/index.html"), PageKey::NotFound);
    }

    #[test]
    fn test_normalized_variants() {
        assert_eq!(resolve(""), PageKey::Home);
        assert_eq!(resolve("/about/"), PageKey::About);
        assert_eq!(resolve("/ABOUT"), PageKey::About);
        assert_eq!(resolve("/contact-us?utm_source=x"), PageKey::Contact);
        assert_eq!(resolve("/contact%2Dus#office-hours"), PageKey::Contact);
    }

    #[test]
    fn test_canonical_paths_resolve_to_themselves() {
        for page in PageKey::ROUTED {
            let path = page.path().unwrap();
            assert_eq!(resolve(path), page);
        }
    }
}
