//! `[site]` configuration.
//!
//! Site-wide values. `title` and `description` form the base document
//! head that is shown whenever no page owns the head; `url` is the public
//! origin used for sitemap entries and the `render` command's 404
//! `og:url`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "React Landing App"
//! description = "A small landing site"
//! url = "https://example.com"
//! language = "en"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base document title.
    pub title: String,

    /// Base meta description.
    pub description: String,

    /// Public site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code for `<html lang>` (e.g., "en").
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "React Landing App".into(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

/// Field paths of `[site]`.
pub struct SiteFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub language: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
        language: FieldPath::new("site.language"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - If `sitemap_enabled`, `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - `language` must not be empty
    pub fn validate(&self, sitemap_enabled: bool, diag: &mut ConfigDiagnostics) {
        if sitemap_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "sitemap is enabled but site.url is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.language.trim().is_empty() {
            diag.error(Self::FIELDS.language, "language must not be empty");
        }

        if self.title.is_empty() {
            diag.warn(
                Self::FIELDS.title,
                "no base title, pages without a mounted head render untitled",
            );
        }
    }

    /// Site URL without trailing slash.
    pub fn base_url(&self) -> Option<&str> {
        self.url.as_deref().map(|url| url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "React Landing App");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_site_parse() {
        let config = test_parse_config(
            "[site]\ntitle = \"Acme\"\nurl = \"https://acme.dev/\"\nlanguage = \"de\"",
        );
        assert_eq!(config.site.title, "Acme");
        assert_eq!(config.site.base_url(), Some("https://acme.dev"));
        assert_eq!(config.site.language, "de");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let site = SiteSectionConfig {
            url: Some("ftp://example.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(false, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_garbage_url() {
        let site = SiteSectionConfig {
            url: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_sitemap_requires_url() {
        let site = SiteSectionConfig::default();

        let mut diag = ConfigDiagnostics::new();
        site.validate(true, &mut diag);
        assert_eq!(diag.errors()[0].field, SiteSectionConfig::FIELDS.url);

        let mut diag = ConfigDiagnostics::new();
        site.validate(false, &mut diag);
        assert!(diag.is_empty());
    }
}
