//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `layout` - Document shell (layout.html)
//! - `pages` - Prose body of every page
//! - `css` - Site stylesheet, minified by build.rs
//!
//! # Usage
//!
//! ```ignore
//! use embed::layout::{LAYOUT_HTML, LayoutVars};
//!
//! let html = LAYOUT_HTML.render(&LayoutVars { lang: "en", head, nav, content });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod layout {
    use super::{Template, TemplateVars};

    /// Variables for layout.html.
    ///
    /// `head`, `nav` and `content` are already serialized HTML, each line
    /// indented to its position in the shell.
    pub struct LayoutVars<'a> {
        pub lang: &'a str,
        pub head: &'a str,
        pub nav: &'a str,
        pub content: &'a str,
    }

    impl TemplateVars for LayoutVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__LANG__", self.lang)
                .replace("__HEAD__", self.head)
                .replace("__NAV__", self.nav)
                .replace("__CONTENT__", self.content)
        }
    }

    /// Full document shell shared by every page.
    pub const LAYOUT_HTML: Template<LayoutVars<'static>> =
        Template::new(include_str!("layout.html"));
}

pub mod pages {
    pub const HOME_HTML: &str = include_str!("pages/home.html");
    pub const ABOUT_HTML: &str = include_str!("pages/about.html");
    pub const CONTACT_HTML: &str = include_str!("pages/contact.html");
    pub const NOT_FOUND_HTML: &str = include_str!("pages/not_found.html");
}

pub mod css {
    /// Site stylesheet, served as `/style.css`.
    pub const SITE_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/site.min.css"));
}
