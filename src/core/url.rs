//! URL path type for request path handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input

use std::sync::Arc;

use percent_encoding::percent_decode_str;

/// Decoded request path.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - No trailing slash, except for the root path `/`
/// - No query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from a browser URL or request target.
    ///
    /// Strips query string and fragment, percent-decodes, and normalizes
    /// leading/trailing slashes. Invalid UTF-8 after decoding keeps the
    /// raw path.
    pub fn from_browser(encoded: &str) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_decoded(&decoded)
    }

    /// Create from an already decoded path.
    pub fn from_decoded(decoded: &str) -> Self {
        let trimmed = decoded.trim().trim_matches('/');

        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        Self(Arc::from(format!("/{trimmed}")))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join onto a site base URL (e.g. `https://example.com`).
    pub fn absolute(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.as_str())
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_browser_strips_query_and_fragment() {
        assert_eq!(UrlPath::from_browser("/about?ref=nav").as_str(), "/about");
        assert_eq!(UrlPath::from_browser("/about#mission").as_str(), "/about");
        assert_eq!(UrlPath::from_browser("/?q=1").as_str(), "/");
    }

    #[test]
    fn test_from_browser_decodes() {
        assert_eq!(
            UrlPath::from_browser("/contact%2Dus").as_str(),
            "/contact-us"
        );
        assert_eq!(UrlPath::from_browser("/caf%C3%A9").as_str(), "/café");
    }

    #[test]
    fn test_slash_normalization() {
        assert_eq!(UrlPath::from_browser("").as_str(), "/");
        assert_eq!(UrlPath::from_browser("/").as_str(), "/");
        assert_eq!(UrlPath::from_browser("about/").as_str(), "/about");
        assert_eq!(UrlPath::from_browser("//about//").as_str(), "/about");
        assert_eq!(UrlPath::from_browser("///").as_str(), "/");
    }

    #[test]
    fn test_absolute() {
        let path = UrlPath::from_browser("/about");
        assert_eq!(
            path.absolute("https://example.com/"),
            "https://example.com/about"
        );
        assert_eq!(
            UrlPath::from_browser("/").absolute("https://example.com"),
            "https://example.com/"
        );
    }
}
