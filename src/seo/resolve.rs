//! Fallback resolution for metadata records.
//!
//! Each optional field is resolved independently:
//!
//! | Field                 | Resolution order                                   |
//! |-----------------------|----------------------------------------------------|
//! | `og:title`            | explicit → `title`                                 |
//! | `og:description`      | explicit → `description`                           |
//! | `twitter:title`       | explicit → `og:title` (resolved) → `title`         |
//! | `twitter:description` | explicit → `og:description` (resolved) → `description` |
//! | `og:type`             | explicit → `"website"`                             |
//! | `twitter:card`        | explicit → `"summary_large_image"`                 |
//! | `og:url`, `og:image`  | explicit only, tag omitted otherwise               |
//!
//! An explicit value that is an empty string counts as absent.

use serde::Serialize;

use super::head::{HeadKey, HeadTag};
use super::meta::MetadataRecord;
use super::og::{DEFAULT_OG_TYPE, DEFAULT_TWITTER_CARD};

/// Post-fallback view of a [`MetadataRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub og_title: &'a str,
    pub og_description: &'a str,
    pub og_type: &'a str,
    pub og_url: Option<&'a str>,
    pub og_image: Option<&'a str>,
    pub twitter_card: &'a str,
    pub twitter_title: &'a str,
    pub twitter_description: &'a str,
}

/// Treat empty explicit values as missing.
#[inline]
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

impl MetadataRecord {
    /// Apply the fallback rules.
    pub fn resolve(&self) -> ResolvedMeta<'static> {
        let og_title = present(self.og_title).unwrap_or(self.title);
        let og_description = present(self.og_description).unwrap_or(self.description);

        ResolvedMeta {
            title: self.title,
            description: self.description,
            og_title,
            og_description,
            og_type: present(self.og_type).unwrap_or(DEFAULT_OG_TYPE),
            og_url: present(self.og_url),
            og_image: present(self.og_image),
            twitter_card: present(self.twitter_card).unwrap_or(DEFAULT_TWITTER_CARD),
            twitter_title: present(self.twitter_title).unwrap_or(og_title),
            twitter_description: present(self.twitter_description).unwrap_or(og_description),
        }
    }
}

impl<'a> ResolvedMeta<'a> {
    /// Fill `og:url` from the request URL when the record has none.
    pub fn with_url(mut self, url: Option<&'a str>) -> Self {
        if self.og_url.is_none() {
            self.og_url = present(url);
        }
        self
    }

    /// Project into head tags.
    ///
    /// Always yields title, description, og:title, og:description,
    /// og:type, twitter:card, twitter:title and twitter:description;
    /// og:url and og:image only when present.
    pub fn tags(&self) -> Vec<HeadTag> {
        let mut tags = Vec::with_capacity(10);

        tags.push(HeadTag::new(HeadKey::Title, self.title));
        tags.push(HeadTag::new(HeadKey::Name("description"), self.description));

        tags.push(HeadTag::new(HeadKey::Property("og:title"), self.og_title));
        tags.push(HeadTag::new(
            HeadKey::Property("og:description"),
            self.og_description,
        ));
        tags.push(HeadTag::new(HeadKey::Property("og:type"), self.og_type));
        if let Some(url) = self.og_url {
            tags.push(HeadTag::new(HeadKey::Property("og:url"), url));
        }
        if let Some(image) = self.og_image {
            tags.push(HeadTag::new(HeadKey::Property("og:image"), image));
        }

        tags.push(HeadTag::new(HeadKey::Name("twitter:card"), self.twitter_card));
        tags.push(HeadTag::new(HeadKey::Name("twitter:title"), self.twitter_title));
        tags.push(HeadTag::new(
            HeadKey::Name("twitter:description"),
            self.twitter_description,
        ));

        tags
    }
}
