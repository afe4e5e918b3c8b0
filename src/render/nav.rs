//! Navigation menu.

use std::fmt::Write;

use crate::page::PageKey;

/// Render the navigation for the page `current`.
///
/// Only the current page's link is active. The not-found page has no
/// entry, so nothing is highlighted there.
pub fn render(current: PageKey) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("    <nav class=\"layout-nav\">\n");
    html.push_str("      <ul class=\"nav-list\">\n");

    for page in PageKey::ROUTED {
        let Some(path) = page.path() else { continue };
        let active = page == current;
        let _ = writeln!(
            html,
            r#"        <li class="nav-item"><a href="{path}" class="{}"{}>{}</a></li>"#,
            if active { "nav-link active" } else { "nav-link" },
            if active { r#" aria-current="page""# } else { "" },
            page.nav_label(),
        );
    }

    html.push_str("      </ul>\n");
    html.push_str("    </nav>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_links(html: &str) -> Vec<String> {
        let dom = tl::parse(html, tl::ParserOptions::default()).unwrap();
        let parser = dom.parser();
        dom.query_selector(".active")
            .unwrap()
            .filter_map(|handle| handle.get(parser))
            .map(|node| node.inner_text(parser).to_string())
            .collect()
    }

    #[test]
    fn test_exactly_current_page_active() {
        assert_eq!(active_links(&render(PageKey::Home)), ["Home"]);
        assert_eq!(active_links(&render(PageKey::About)), ["About"]);
        assert_eq!(active_links(&render(PageKey::Contact)), ["Contact Us"]);
    }

    #[test]
    fn test_not_found_highlights_nothing() {
        let html = render(PageKey::NotFound);
        assert!(active_links(&html).is_empty());
        assert_eq!(html.matches("class=\"nav-link\"").count(), 3);
    }

    #[test]
    fn test_links_point_to_routes() {
        let html = render(PageKey::Home);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/about""#));
        assert!(html.contains(r#"href="/contact-us""#));
    }
}
