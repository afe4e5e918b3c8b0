//! Shared helpers.

pub mod html;
pub mod mime;

/// Format a count with its noun, pluralized with a trailing `s`.
///
/// ```ignore
/// assert_eq!(plural_count(1, "page"), "1 page");
/// assert_eq!(plural_count(4, "page"), "4 pages");
/// ```
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
