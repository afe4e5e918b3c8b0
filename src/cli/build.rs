//! Static site build.
//!
//! Build phases:
//! - **Init** - Clear (with `--clean`) and create the output directory
//! - **Render** - Mount each page in turn and write its document, in
//!   parallel with the sitemap
//! - **Assets** - Write the embedded stylesheet

use crate::{
    config::SiteConfig,
    embed::css::SITE_CSS,
    generator::sitemap::build_sitemap,
    log,
    page::PageKey,
    render::Site,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// File name of the stylesheet in the output directory.
pub const STYLESHEET_FILE: &str = "style.css";

/// Build the entire site into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    init_output(output, config.build.clean)?;

    let (pages_result, sitemap_result) =
        rayon::join(|| write_pages(config, output), || build_sitemap(config));
    let written = pages_result?;
    sitemap_result?;

    write_asset(output, STYLESHEET_FILE, SITE_CSS)?;

    log!("build"; "{} written to {}", plural_count(written, "page"), output.display());
    Ok(())
}

/// Prepare the output directory, removing it first when `clean` is set.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render every page, one mount at a time.
fn write_pages(config: &SiteConfig, output: &Path) -> Result<usize> {
    let mut site = Site::new(config);

    for key in PageKey::ALL {
        let page = site.render_key(key, None);
        let path = output.join(key.output_file());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, page.html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        crate::debug!("build"; "{} -> {}", key, key.output_file());
    }

    Ok(PageKey::ALL.len())
}

fn write_asset(output: &Path, name: &str, content: &str) -> Result<()> {
    let path = output.join(name);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.build.output = dir.path().join("public");
        config
    }

    #[test]
    fn test_build_writes_every_page() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        build_site(&config).unwrap();

        let output = &config.build.output;
        for file in [
            "index.html",
            "about/index.html",
            "contact-us/index.html",
            "404.html",
            STYLESHEET_FILE,
        ] {
            assert!(output.join(file).is_file(), "missing {file}");
        }
        assert!(!output.join("sitemap.xml").exists());

        let about = fs::read_to_string(output.join("about/index.html")).unwrap();
        assert!(about.contains("<title>About Us - React Landing App</title>"));
    }

    #[test]
    fn test_build_not_found_has_no_og_url() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        build_site(&config).unwrap();

        let html = fs::read_to_string(config.build.output.join("404.html")).unwrap();
        assert!(html.contains("<h1>404 - Page Not Found</h1>"));
        assert!(!html.contains("og:url"));
        assert!(!html.contains("metadata-display"));
    }

    #[test]
    fn test_build_with_sitemap() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.build.sitemap = true;
        config.site.url = Some("https://example.com".to_string());

        build_site(&config).unwrap();

        let xml = fs::read_to_string(config.build.output.join("sitemap.xml")).unwrap();
        assert_eq!(xml.matches("<loc>").count(), 3);
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        let stale = config.build.output.join("old.html");
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(&stale, "stale").unwrap();

        build_site(&config).unwrap();
        assert!(stale.exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!stale.exists());
        assert!(config.build.output.join("index.html").is_file());
    }
}
