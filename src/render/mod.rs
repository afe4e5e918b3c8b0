//! Page rendering.
//!
//! [`Site`] owns the document head. Mounting a page resolves the request
//! path, projects the page's metadata into the head, and hands back a
//! [`MountedPage`] that renders the full document. Dropping the mounted
//! page unmounts it and restores the base head.
//!
//! ```text
//! Site::mount("/about") ─▶ route::resolve ─▶ PageKey::About
//!                                               │
//!                     metadata().resolve().tags()
//!                                               │
//!                          DocumentHead::project ─▶ MountedPage ─render─▶ HTML
//! ```

mod nav;
mod panel;

use crate::config::SiteConfig;
use crate::embed::layout::{LAYOUT_HTML, LayoutVars};
use crate::page::{PageKey, route};
use crate::seo::{DocumentHead, HeadProjection, ResolvedMeta, SiteDefaults};

/// The rendered site: base head plus render settings.
#[derive(Debug, Clone)]
pub struct Site {
    head: DocumentHead,
    lang: String,
    debug_panel: bool,
}

/// Output of a mount → render → unmount cycle.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub key: PageKey,
    /// HTTP status: 200, or 404 for the not-found page.
    pub status: u16,
    pub html: String,
}

impl Site {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            head: SiteDefaults::from_config(config).base_head(),
            lang: config.site.language.clone(),
            debug_panel: config.build.debug_panel,
        }
    }

    #[cfg(test)]
    /// Head as it is while no page is mounted.
    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// Mount the page for `path`.
    ///
    /// `url` is the full request URL. It becomes `og:url` for pages whose
    /// record has none.
    pub fn mount<'s>(&'s mut self, path: &str, url: Option<&'s str>) -> MountedPage<'s> {
        let key = route::resolve(path);
        crate::debug!("render"; "{} -> {}", path, key);
        self.mount_page(key, url)
    }

    /// Mount a known page, bypassing the route table.
    pub fn mount_page<'s>(&'s mut self, key: PageKey, url: Option<&'s str>) -> MountedPage<'s> {
        let meta = key.metadata().resolve().with_url(url);
        let projection = self.head.project(meta.tags());

        MountedPage {
            key,
            meta,
            projection,
            lang: &self.lang,
            debug_panel: self.debug_panel && !key.is_not_found(),
        }
    }

    /// Mount, render, and unmount the page for `path`.
    pub fn render_page(&mut self, path: &str, url: Option<&str>) -> RenderedPage {
        self.render_key(route::resolve(path), url)
    }

    /// Mount, render, and unmount a known page.
    pub fn render_key(&mut self, key: PageKey, url: Option<&str>) -> RenderedPage {
        let page = self.mount_page(key, url);
        RenderedPage {
            key: page.key(),
            status: page.status(),
            html: page.render(),
        }
    }
}

/// The page currently holding the document head.
#[derive(Debug)]
pub struct MountedPage<'s> {
    key: PageKey,
    meta: ResolvedMeta<'s>,
    projection: HeadProjection<'s>,
    lang: &'s str,
    debug_panel: bool,
}

impl MountedPage<'_> {
    pub fn key(&self) -> PageKey {
        self.key
    }

    #[cfg(test)]
    pub fn meta(&self) -> &ResolvedMeta<'_> {
        &self.meta
    }

    /// Document head with this page's tags applied.
    pub fn head(&self) -> &DocumentHead {
        &self.projection
    }

    pub fn status(&self) -> u16 {
        if self.key.is_not_found() { 404 } else { 200 }
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let head = self.projection.to_html("  ");
        let nav = nav::render(self.key);
        let content = self.render_content();

        LAYOUT_HTML.render(&LayoutVars {
            lang: self.lang,
            head: &head,
            nav: &nav,
            content: &content,
        })
    }

    #[cfg(test)]
    /// Unmount explicitly. Same as dropping the page.
    pub fn unmount(self) {}

    fn render_content(&self) -> String {
        let body = self.key.body();
        let mut html = String::with_capacity(body.len() * 2);

        html.push_str("      <div class=\"");
        html.push_str(self.key.content_class());
        html.push_str("\">\n");
        for line in body.lines() {
            if !line.is_empty() {
                html.push_str("        ");
                html.push_str(line);
            }
            html.push('\n');
        }
        if self.debug_panel {
            html.push('\n');
            html.push_str(&panel::render(&self.meta));
        }
        html.push_str("      </div>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::head::HeadKey;

    fn site() -> Site {
        Site::new(&SiteConfig::default())
    }

    fn select_text(html: &str, selector: &str) -> Vec<String> {
        let dom = tl::parse(html, tl::ParserOptions::default()).unwrap();
        let parser = dom.parser();
        dom.query_selector(selector)
            .unwrap()
            .filter_map(|handle| handle.get(parser))
            .map(|node| node.inner_text(parser).trim().to_string())
            .collect()
    }

    #[test]
    fn test_headings_per_route() {
        let mut site = site();
        for (path, heading) in [
            ("/", "Welcome to React Landing App"),
            ("/about", "About Us"),
            ("/contact-us", "Contact Us"),
            ("/invalid-route", "404 - Page Not Found"),
        ] {
            let page = site.render_page(path, None);
            assert_eq!(select_text(&page.html, "h1"), [heading], "{path}");
        }
    }

    #[test]
    fn test_rendered_page_reports_route_key() {
        let mut site = site();
        assert_eq!(site.render_page("/ABOUT/", None).key, PageKey::About);
        assert_eq!(site.render_page("/contact-us?x=1", None).key, PageKey::Contact);

        let nested = site.render_page("/about/team", None);
        assert_eq!(nested.key, PageKey::NotFound);
        assert_eq!(nested.status, 404);
        assert!(select_text(&nested.html, ".active").is_empty());
    }

    #[test]
    fn test_status_codes() {
        let mut site = site();
        assert_eq!(site.render_page("/", None).status, 200);
        assert_eq!(site.render_page("/about/", None).status, 200);
        let missing = site.render_page("/pricing", None);
        assert_eq!(missing.status, 404);
        assert_eq!(missing.key, PageKey::NotFound);
    }

    #[test]
    fn test_document_contains_projected_head() {
        let mut site = site();
        let html = site.render_page("/contact-us", None).html;

        assert_eq!(
            select_text(&html, "title"),
            ["Contact Us - React Landing App"]
        );
        assert!(html.contains(
            r#"<meta property="og:title" content="React Landing App - Contact Us Page">"#
        ));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert_eq!(html.matches("<title>").count(), 1);
    }

    #[test]
    fn test_active_nav_in_document() {
        let mut site = site();
        let html = site.render_page("/about", None).html;
        assert_eq!(select_text(&html, ".active"), ["About"]);

        let html = site.render_page("/nowhere", None).html;
        assert!(select_text(&html, ".active").is_empty());
    }

    #[test]
    fn test_debug_panel_only_on_content_pages() {
        let mut site = site();
        assert!(site.render_page("/", None).html.contains("metadata-display"));
        assert!(!site.render_page("/missing", None).html.contains("metadata-display"));
    }

    #[test]
    fn test_debug_panel_disabled_by_config() {
        let mut config = SiteConfig::default();
        config.build.debug_panel = false;
        let mut site = Site::new(&config);
        assert!(!site.render_page("/", None).html.contains("metadata-display"));
    }

    #[test]
    fn test_unmount_restores_base_head() {
        let mut site = site();
        let base = site.head().clone();

        {
            let page = site.mount("/about", None);
            assert_eq!(page.head().title(), Some("About Us - React Landing App"));
        }
        assert_eq!(site.head(), &base);

        site.mount("/contact-us", None).unmount();
        assert_eq!(site.head(), &base);
    }

    #[test]
    fn test_navigation_leaves_no_stale_tags() {
        let mut site = site();
        let home = site.render_page("/", None).html;
        let about = site.render_page("/about", None).html;

        assert!(home.contains("React Landing App - Home Page"));
        assert!(!about.contains("React Landing App - Home Page"));
        assert!(!about.contains("https://example.com/images/home-og-image.jpg"));
    }

    #[test]
    fn test_not_found_og_url_from_request() {
        let mut site = site();
        let url = "http://127.0.0.1:5277/nope";
        let page = site.mount("/nope", Some(url));
        assert_eq!(page.head().get(HeadKey::Property("og:url")), Some(url));
        page.unmount();

        let page = site.mount("/nope", None);
        assert!(!page.head().contains(HeadKey::Property("og:url")));
    }

    #[test]
    fn test_routed_page_keeps_own_og_url() {
        let mut site = site();
        let page = site.mount("/about", Some("http://localhost/about"));
        assert_eq!(
            page.head().get(HeadKey::Property("og:url")),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_document_language() {
        let mut config = SiteConfig::default();
        config.site.language = "fr".to_string();
        let mut site = Site::new(&config);
        assert!(site.render_page("/", None).html.contains(r#"<html lang="fr">"#));
    }
}
