//! Page identities, routing, and prose.

mod content;
mod kind;
pub mod route;

pub use kind::PageKey;
