//! Page identity.

use std::fmt;

use serde::Serialize;

/// One of the fixed pages of the site.
///
/// Every key owns exactly one metadata record and one prose body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    Home,
    About,
    Contact,
    /// Fallback for every path outside the route table.
    NotFound,
}

impl PageKey {
    /// All page keys, routed pages first.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Contact, Self::NotFound];

    /// Pages reachable through the route table (and listed in the nav).
    pub const ROUTED: [Self; 3] = [Self::Home, Self::About, Self::Contact];

    /// Registry key of this page.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Contact => "contact",
            Self::NotFound => "not-found",
        }
    }

    /// Parse a registry key. Returns `None` for keys outside the fixed set.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == key)
    }

    /// Canonical request path (`None` for the not-found page).
    pub const fn path(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::About => Some("/about"),
            Self::Contact => Some("/contact-us"),
            Self::NotFound => None,
        }
    }

    /// Label used for this page in the navigation menu.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact Us",
            Self::NotFound => "",
        }
    }

    #[inline]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Output file of this page relative to the build directory.
    ///
    /// ```text
    /// /            -> index.html
    /// /about       -> about/index.html
    /// /contact-us  -> contact-us/index.html
    /// (not found)  -> 404.html
    /// ```
    pub fn output_file(self) -> String {
        match self.path() {
            Some("/") => "index.html".to_string(),
            Some(path) => format!("{}/index.html", path.trim_start_matches('/')),
            None => "404.html".to_string(),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
