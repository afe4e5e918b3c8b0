//! Sitemap generation.
//!
//! Lists every routed page for search engine indexing. The not-found page
//! is never listed.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, page::PageKey};
use anyhow::{Context, Result, bail};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File name of the sitemap in the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    if !config.build.sitemap {
        return Ok(());
    }

    let Some(base_url) = config.site.base_url() else {
        bail!("sitemap requires site.url");
    };

    let path = config.build.output.join(SITEMAP_FILE);
    fs::write(&path, render_sitemap(base_url))
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", SITEMAP_FILE);
    Ok(())
}

/// Sitemap XML for the routed pages under `base_url`.
pub fn render_sitemap(base_url: &str) -> String {
    Sitemap::routed(base_url).into_xml()
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// One entry per routed page, in route-table order.
    fn routed(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = PageKey::ROUTED
            .into_iter()
            .filter_map(PageKey::path)
            .map(|path| format!("{base_url}{path}"))
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
