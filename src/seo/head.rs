//! Document head and scoped head projection.
//!
//! [`DocumentHead`] is the single shared `<head>` of the rendered document.
//! A page writes its tags through [`DocumentHead::project`], which returns a
//! [`HeadProjection`] guard. While the guard lives the head shows the
//! page's tags; when it is dropped every change is reverted, so the next
//! page starts from the base head and never sees stale tags.
//!
//! ```text
//! base head        project(home)            drop            project(about)
//! ┌──────────┐     ┌──────────────────┐     ┌──────────┐    ┌───────────────────┐
//! │ title    │ ──▶ │ title (home)     │ ──▶ │ title    │ ─▶ │ title (about)     │
//! │ desc     │     │ desc  (home)     │     │ desc     │    │ desc  (about)     │
//! └──────────┘     │ og:*, twitter:*  │     └──────────┘    │ og:*, twitter:*   │
//!                  └──────────────────┘                     └───────────────────┘
//! ```
//!
//! The guard holds `&mut DocumentHead`, so two pages can never project at
//! the same time.

use std::fmt;
use std::ops::Deref;

use crate::utils::html::{escape, escape_attr};

/// Identity of a head element. Two tags with equal keys are the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadKey {
    /// `<title>`
    Title,
    /// `<meta name="…">`
    Name(&'static str),
    /// `<meta property="…">`
    Property(&'static str),
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Name(name) => write!(f, "meta[name=\"{name}\"]"),
            Self::Property(property) => write!(f, "meta[property=\"{property}\"]"),
        }
    }
}

/// A head element with its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub key: HeadKey,
    content: String,
}

impl HeadTag {
    pub fn new(key: HeadKey, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
        }
    }

    #[cfg(test)]
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Serialize as HTML, escaping the content.
    pub fn to_html(&self) -> String {
        match self.key {
            HeadKey::Title => format!("<title>{}</title>", escape(&self.content)),
            HeadKey::Name(name) => format!(
                r#"<meta name="{name}" content="{}">"#,
                escape_attr(&self.content)
            ),
            HeadKey::Property(property) => format!(
                r#"<meta property="{property}" content="{}">"#,
                escape_attr(&self.content)
            ),
        }
    }
}

/// The shared document head.
///
/// Tags keep insertion order; updating an existing key replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    tags: Vec<HeadTag>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    /// Content of the tag with `key`, if present.
    pub fn get(&self, key: HeadKey) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(HeadTag::content)
    }

    #[cfg(test)]
    /// Current document title.
    pub fn title(&self) -> Option<&str> {
        self.get(HeadKey::Title)
    }

    #[cfg(test)]
    pub fn contains(&self, key: HeadKey) -> bool {
        self.tags.iter().any(|tag| tag.key == key)
    }

    /// Insert or update a tag. Returns the tag it replaced.
    pub fn upsert(&mut self, tag: HeadTag) -> Option<HeadTag> {
        match self.tags.iter_mut().find(|t| t.key == tag.key) {
            Some(slot) => Some(std::mem::replace(slot, tag)),
            None => {
                self.tags.push(tag);
                None
            }
        }
    }

    /// Remove the tag with `key`. Returns the removed tag.
    pub fn remove(&mut self, key: HeadKey) -> Option<HeadTag> {
        let index = self.tags.iter().position(|tag| tag.key == key)?;
        Some(self.tags.remove(index))
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &HeadTag> {
        self.tags.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Serialize all tags, one per line, each prefixed with `indent`.
    pub fn to_html(&self, indent: &str) -> String {
        let mut html = String::with_capacity(self.tags.len() * 96);
        for tag in &self.tags {
            html.push_str(indent);
            html.push_str(&tag.to_html());
            html.push('\n');
        }
        html
    }

    /// Apply `tags` for the lifetime of the returned guard.
    pub fn project(&mut self, tags: impl IntoIterator<Item = HeadTag>) -> HeadProjection<'_> {
        let mut undo = Vec::new();
        for tag in tags {
            let key = tag.key;
            match self.upsert(tag) {
                Some(previous) => undo.push(Undo::Restore(previous)),
                None => undo.push(Undo::Remove(key)),
            }
        }
        HeadProjection { head: self, undo }
    }
}

/// How to revert one projected tag.
#[derive(Debug)]
enum Undo {
    /// The tag replaced an existing one: put the old one back.
    Restore(HeadTag),
    /// The tag was new: take it out again.
    Remove(HeadKey),
}

/// Ownership of the document head by the mounted page.
///
/// Reverts on drop, in reverse order of application.
#[derive(Debug)]
pub struct HeadProjection<'h> {
    head: &'h mut DocumentHead,
    undo: Vec<Undo>,
}

impl HeadProjection<'_> {
    #[cfg(test)]
    /// Number of tags this projection owns.
    pub fn owned(&self) -> usize {
        self.undo.len()
    }

    #[cfg(test)]
    /// Unmount explicitly. Same as dropping the guard.
    pub fn release(self) {}
}

impl Deref for HeadProjection<'_> {
    type Target = DocumentHead;

    fn deref(&self) -> &DocumentHead {
        self.head
    }
}

impl Drop for HeadProjection<'_> {
    fn drop(&mut self) {
        for undo in self.undo.drain(..).rev() {
            match undo {
                Undo::Restore(tag) => {
                    self.head.upsert(tag);
                }
                Undo::Remove(key) => {
                    self.head.remove(key);
                }
            }
        }
    }
}
