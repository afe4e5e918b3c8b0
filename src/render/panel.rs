//! Metadata debug panel.
//!
//! A collapsible card listing the resolved values of the mounted page, so
//! the head contents can be checked without opening the page source.

use std::fmt::Write;

use crate::seo::ResolvedMeta;
use crate::utils::html::escape;

/// Shown in place of optional values the page does not set.
const UNSET: &str = "(not set)";

pub fn render(meta: &ResolvedMeta<'_>) -> String {
    let sections: [(&str, &[(&str, Option<&str>)]); 3] = [
        (
            "Basic Metadata",
            &[
                ("Title", Some(meta.title)),
                ("Description", Some(meta.description)),
            ],
        ),
        (
            "Open Graph Tags",
            &[
                ("og:title", Some(meta.og_title)),
                ("og:description", Some(meta.og_description)),
                ("og:type", Some(meta.og_type)),
                ("og:url", meta.og_url),
                ("og:image", meta.og_image),
            ],
        ),
        (
            "Twitter Card Tags",
            &[
                ("twitter:card", Some(meta.twitter_card)),
                ("twitter:title", Some(meta.twitter_title)),
                ("twitter:description", Some(meta.twitter_description)),
            ],
        ),
    ];

    let mut html = String::with_capacity(2048);
    html.push_str("        <details class=\"metadata-display\" open>\n");
    html.push_str("          <summary>Metadata Debug Panel</summary>\n");
    html.push_str("          <div class=\"metadata-display-content\">\n");

    for (heading, items) in sections {
        html.push_str("            <div class=\"metadata-section\">\n");
        let _ = writeln!(html, "              <h4>{heading}</h4>");
        for (label, value) in items {
            let _ = writeln!(
                html,
                r#"              <div class="metadata-item"><span class="metadata-label">{label}:</span> <span class="metadata-value">{}</span></div>"#,
                escape(value.unwrap_or(UNSET)),
            );
        }
        html.push_str("            </div>\n");
    }

    html.push_str("          </div>\n");
    html.push_str("        </details>\n");
    html
}
