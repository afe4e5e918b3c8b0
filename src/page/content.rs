//! Prose body of every page.

use super::PageKey;
use crate::embed::pages::{ABOUT_HTML, CONTACT_HTML, HOME_HTML, NOT_FOUND_HTML};

impl PageKey {
    /// Embedded HTML body, starting with the page's `<h1>`.
    pub const fn body(self) -> &'static str {
        match self {
            Self::Home => HOME_HTML,
            Self::About => ABOUT_HTML,
            Self::Contact => CONTACT_HTML,
            Self::NotFound => NOT_FOUND_HTML,
        }
    }

    #[cfg(test)]
    /// Text of the page's `<h1>`.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Home => "Welcome to React Landing App",
            Self::About => "About Us",
            Self::Contact => "Contact Us",
            Self::NotFound => "404 - Page Not Found",
        }
    }

    /// Class list of the content wrapper.
    pub const fn content_class(self) -> &'static str {
        match self {
            Self::NotFound => "page-content not-found-page",
            _ => "page-content",
        }
    }
}
