//! Open Graph and Twitter Card defaults.
//!
//! Page-specific tags come from the metadata registry. This module only
//! holds the protocol defaults and the site-level base head that is in
//! place while no page is mounted.

use super::head::{DocumentHead, HeadKey, HeadTag};
use crate::config::SiteConfig;

/// `og:type` when a record leaves it unset.
pub const DEFAULT_OG_TYPE: &str = "website";

/// `twitter:card` when a record leaves it unset.
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Site-level head content from `[site]`.
pub struct SiteDefaults<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> SiteDefaults<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.site.title,
            description: &config.site.description,
        }
    }

    /// Base head: the site title and description, if configured.
    pub fn base_head(&self) -> DocumentHead {
        let mut head = DocumentHead::new();
        if !self.title.is_empty() {
            head.upsert(HeadTag::new(HeadKey::Title, self.title));
        }
        if !self.description.is_empty() {
            head.upsert(HeadTag::new(HeadKey::Name("description"), self.description));
        }
        head
    }
}
