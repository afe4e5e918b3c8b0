//! Configuration section definitions.
//!
//! Each module corresponds to a section in `landing.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Output directory, sitemap, debug panel   |
//! | `serve` | `[serve]`    | Development server                       |
//! | `site`  | `[site]`     | Base title/description, URL, language    |

mod build;
mod serve;
mod site;

pub use build::BuildSectionConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
