//! Site configuration management for `landing.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── serve      # [serve]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: without one, defaults apply and the
//! current directory is the project root.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, ServeConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing landing.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(cli);
        config.validate()?;
        config.normalize_paths();

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Resolve relative paths against the project root.
    fn normalize_paths(&mut self) {
        if self.build.output.is_relative() {
            self.build.output = self.root_join(&self.build.output);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                interface,
                port,
                debug_panel,
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                Self::update_option(&mut self.build.debug_panel, debug_panel.as_ref());
            }
            // Render and query only read the config
            Commands::Render { .. } | Commands::Query { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(output) = &args.output {
            self.build.output = output.clone();
        }
        self.build.clean = self.build.clean || args.clean;
        Self::update_option(&mut self.build.sitemap, args.sitemap.as_ref());
        Self::update_option(&mut self.build.debug_panel, args.debug_panel.as_ref());

        // Override site URL if provided via CLI
        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration, collecting every problem.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.build.sitemap, &mut diag);
        self.build.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["landing"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[site]\ntitel = \"typo\"\n[extra]\nx = 1").unwrap();
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f == "site.titel"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::parse_with_ignored("[site\n").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_build_args_override_config() {
        let mut config = test_parse_config("[build]\nsitemap = false\ndebug_panel = true");
        config.apply_command_options(&cli(&[
            "build",
            "--sitemap",
            "--debug-panel",
            "false",
            "-U",
            "https://override.dev",
            "-o",
            "dist",
        ]));

        assert!(config.build.sitemap);
        assert!(!config.build.debug_panel);
        assert_eq!(config.site.url.as_deref(), Some("https://override.dev"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_serve_args_override_config() {
        let mut config = test_parse_config("[serve]\nport = 3000");
        config.apply_command_options(&cli(&["serve", "--port", "9000"]));
        assert_eq!(config.serve.port, 9000);

        let mut config = test_parse_config("[serve]\nport = 3000");
        config.apply_command_options(&cli(&["serve"]));
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_normalize_output_against_root() {
        let mut config = test_parse_config("");
        config.root = PathBuf::from("/srv/site");
        config.normalize_paths();
        assert_eq!(config.build.output, PathBuf::from("/srv/site/public"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[site]\nurl = \"mailto:hi@example.com\"\n[build]\noutput = \"\"\nsitemap = true",
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert!(diag.len() >= 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }
}
