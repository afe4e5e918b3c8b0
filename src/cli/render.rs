//! Render command: print one page to stdout.

use anyhow::Result;
use std::io::{Write, stdout};

use crate::cli::args::RenderArgs;
use crate::config::SiteConfig;
use crate::render::Site;

pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let mut site = Site::new(config);
    let output = render_to_string(&mut site, args, config.site.base_url());

    let mut stdout = stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// The page document, or only its head tags with `--head-only`.
///
/// With a configured base URL the not-found page gets the absolute
/// request URL as `og:url`.
fn render_to_string(site: &mut Site, args: &RenderArgs, base_url: Option<&str>) -> String {
    let url = base_url.map(|base| crate::core::UrlPath::from_browser(&args.path).absolute(base));
    let page = site.mount(&args.path, url.as_deref());

    if args.head_only {
        page.head().to_html("")
    } else {
        page.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: &str, head_only: bool) -> RenderArgs {
        RenderArgs {
            path: path.to_string(),
            head_only,
        }
    }

    #[test]
    fn test_render_head_only() {
        let mut site = Site::new(&SiteConfig::default());
        let head = render_to_string(&mut site, &args("/contact-us", true), None);

        assert!(head.starts_with("<title>Contact Us - React Landing App</title>\n"));
        assert!(!head.contains("<body>"));
        assert_eq!(head.lines().count(), 10);
    }

    #[test]
    fn test_render_full_document() {
        let mut site = Site::new(&SiteConfig::default());
        let html = render_to_string(&mut site, &args("/", false), None);
        assert!(html.contains("<h1>Welcome to React Landing App</h1>"));
    }

    #[test]
    fn test_render_not_found_with_base_url() {
        let mut site = Site::new(&SiteConfig::default());
        let head = render_to_string(
            &mut site,
            &args("/gone?x=1", true),
            Some("https://example.com"),
        );
        assert!(head.contains(r#"<meta property="og:url" content="https://example.com/gone">"#));
    }
}
