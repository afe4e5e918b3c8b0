//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"    # Output directory (relative to project root)
//! clean = false        # Remove the output directory before building
//! sitemap = true       # Write sitemap.xml (requires site.url)
//! debug_panel = true   # Show the metadata debug panel on content pages
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory.
    pub output: PathBuf,

    /// Clean output directory completely before building.
    pub clean: bool,

    /// Write sitemap.xml.
    pub sitemap: bool,

    /// Render the metadata debug panel on content pages.
    pub debug_panel: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            clean: false,
            sitemap: false,
            debug_panel: true,
        }
    }
}

/// Field paths of `[build]`.
pub struct BuildFields {
    pub output: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        output: FieldPath::new("build.output"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.output,
                "output directory must not be empty",
                "use e.g. \"public\"",
            );
        }
    }
}
