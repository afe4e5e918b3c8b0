//! SEO metadata: registry, fallback resolution, and head projection.
//!
//! ```text
//! PageKey ──▶ meta::MetadataRecord ──resolve──▶ ResolvedMeta ──tags──▶ Vec<HeadTag>
//!                                                                         │
//!                                       DocumentHead::project ◀───────────┘
//! ```

pub mod head;
pub mod meta;
pub mod og;
pub mod resolve;

pub use head::{DocumentHead, HeadProjection};
pub use meta::MetadataRecord;
pub use og::SiteDefaults;
pub use resolve::ResolvedMeta;
