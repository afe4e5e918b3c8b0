//! Metadata registry.
//!
//! One static [`MetadataRecord`] per page key. Records are authored here,
//! never mutated, and looked up by key. Uniqueness of titles and
//! descriptions across pages is an authoring contract covered by tests.

use serde::Serialize;

use crate::page::PageKey;

/// SEO fields of a single page.
///
/// `title` and `description` are required. Every other field is optional
/// and resolved through the fallback rules in [`super::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<&'static str>,
}

impl MetadataRecord {
    #[cfg(test)]
    /// Record with only the required fields set.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            og_title: None,
            og_description: None,
            og_image: None,
            og_url: None,
            og_type: None,
            twitter_card: None,
            twitter_title: None,
            twitter_description: None,
        }
    }
}

static HOME: MetadataRecord = MetadataRecord {
    title: "Home - React Landing App",
    description: "Welcome to our React 18 application showcasing modern SEO optimization with react-helmet-async and comprehensive Open Graph metadata",
    og_title: Some("React Landing App - Home Page"),
    og_description: Some(
        "A demonstration of react-helmet-async with Open Graph tags for optimal social media sharing",
    ),
    og_image: Some("https://example.com/images/home-og-image.jpg"),
    og_url: Some("https://example.com/"),
    og_type: Some("website"),
    twitter_card: Some("summary_large_image"),
    twitter_title: Some("React Landing App - Home"),
    twitter_description: Some("Welcome to our React 18 application with SEO optimization"),
};

static ABOUT: MetadataRecord = MetadataRecord {
    title: "About Us - React Landing App",
    description: "Learn about our mission and the technology behind this React 18 application with advanced SEO capabilities and metadata management",
    og_title: Some("React Landing App - About Us Page"),
    og_description: Some(
        "Discover our purpose and the modern web technologies powering this application",
    ),
    og_image: Some("https://example.com/images/about-og-image.jpg"),
    og_url: Some("https://example.com/about"),
    og_type: Some("website"),
    twitter_card: Some("summary_large_image"),
    twitter_title: Some("React Landing App - About Us"),
    twitter_description: Some("Learn about our mission and technology stack"),
};

static CONTACT: MetadataRecord = MetadataRecord {
    title: "Contact Us - React Landing App",
    description: "Get in touch with us for inquiries, support, or feedback about our React 18 application and SEO implementation",
    og_title: Some("React Landing App - Contact Us Page"),
    og_description: Some(
        "Reach out to our team for questions, support, or collaboration opportunities",
    ),
    og_image: Some("https://example.com/images/contact-og-image.jpg"),
    og_url: Some("https://example.com/contact-us"),
    og_type: Some("website"),
    twitter_card: Some("summary_large_image"),
    twitter_title: Some("React Landing App - Contact Us"),
    twitter_description: Some("Get in touch with us for inquiries and support"),
};

// og:url is left out: the not-found page reports the URL that was requested.
static NOT_FOUND: MetadataRecord = MetadataRecord {
    title: "404 - Page Not Found | React Landing App",
    description: "The page you are looking for could not be found. Return to the home page to continue browsing.",
    og_title: Some("404 - Page Not Found"),
    og_description: Some("This page does not exist. Please return to the home page."),
    og_image: Some("https://example.com/images/404-og.jpg"),
    og_url: None,
    og_type: Some("website"),
    twitter_card: Some("summary_large_image"),
    twitter_title: Some("404 - Page Not Found"),
    twitter_description: Some("This page does not exist. Please return to the home page."),
};

impl PageKey {
    /// Metadata record owned by this page.
    pub fn metadata(self) -> &'static MetadataRecord {
        match self {
            Self::Home => &HOME,
            Self::About => &ABOUT,
            Self::Contact => &CONTACT,
            Self::NotFound => &NOT_FOUND,
        }
    }
}

/// Look up a record by registry key.
///
/// Keys outside the fixed set get the not-found record.
pub fn lookup(key: &str) -> &'static MetadataRecord {
    PageKey::from_key(key)
        .unwrap_or(PageKey::NotFound)
        .metadata()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(lookup("home").title, "Home - React Landing App");
        assert_eq!(lookup("about").title, "About Us - React Landing App");
        assert_eq!(lookup("contact").title, "Contact Us - React Landing App");
        assert_eq!(
            lookup("not-found").title,
            "404 - Page Not Found | React Landing App"
        );
    }

    #[test]
    fn test_lookup_unknown_key_falls_back() {
        assert_eq!(lookup("pricing"), PageKey::NotFound.metadata());
        assert_eq!(lookup(""), PageKey::NotFound.metadata());
    }

    #[test]
    fn test_required_fields_never_empty() {
        for page in PageKey::ALL {
            let record = page.metadata();
            assert!(!record.title.is_empty(), "{page}: empty title");
            assert!(!record.description.is_empty(), "{page}: empty description");
        }
    }

    #[test]
    fn test_routed_pages_have_distinct_metadata() {
        let pages = PageKey::ROUTED;
        for (i, a) in pages.iter().enumerate() {
            for b in &pages[i + 1..] {
                let (ma, mb) = (a.metadata(), b.metadata());
                assert_ne!(ma.title, mb.title, "{a}/{b}: title");
                assert_ne!(ma.description, mb.description, "{a}/{b}: description");
                assert_ne!(ma.og_title, mb.og_title, "{a}/{b}: og_title");
                assert_ne!(
                    ma.og_description, mb.og_description,
                    "{a}/{b}: og_description"
                );
            }
        }
    }

    #[test]
    fn test_not_found_has_no_fixed_url() {
        assert!(PageKey::NotFound.metadata().og_url.is_none());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(PageKey::Home.metadata()).unwrap();
        assert_eq!(json["ogTitle"], "React Landing App - Home Page");
        assert_eq!(json["twitterCard"], "summary_large_image");

        let json = serde_json::to_value(MetadataRecord::new("T", "D")).unwrap();
        assert!(json.get("ogUrl").is_none());
    }
}
