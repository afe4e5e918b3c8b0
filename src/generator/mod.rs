//! Auxiliary files generated next to the rendered pages.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;
