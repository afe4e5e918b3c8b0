//! Development server.
//!
//! Renders pages on demand. Requests are handled one at a time on the
//! calling thread, so a single [`Site`] (and its document head) serves
//! every request.
//!
//! ```text
//! GET /style.css    -> embedded stylesheet
//! GET /sitemap.xml  -> sitemap (only with build.sitemap and site.url)
//! GET <anything>    -> mount page -> render -> unmount (404 for not-found)
//! ```

mod lifecycle;
mod response;

use crate::{
    config::SiteConfig,
    core::is_shutdown,
    debug,
    embed::css::SITE_CSS,
    generator::sitemap::render_sitemap,
    log,
    render::Site,
};
use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Start the server and block until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    run_request_loop(&server, config, addr);
    Ok(())
}

fn run_request_loop(server: &Server, config: &SiteConfig, addr: SocketAddr) {
    let mut site = Site::new(config);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &mut site, config, addr) {
            log!("serve"; "request error: {e}");
        }
    }
}

/// What a request path asks for.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Stylesheet,
    Sitemap,
    Page,
}

impl Target {
    fn of(path: &str, config: &SiteConfig) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        match path {
            "/style.css" => Self::Stylesheet,
            "/sitemap.xml" if config.build.sitemap && config.site.url.is_some() => Self::Sitemap,
            _ => Self::Page,
        }
    }
}

/// Handle a single HTTP request
fn handle_request(
    request: Request,
    site: &mut Site,
    config: &SiteConfig,
    addr: SocketAddr,
) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    match Target::of(request.url(), config) {
        Target::Stylesheet => response::respond_css(request, SITE_CSS),
        Target::Sitemap => {
            let xml = render_sitemap(config.site.base_url().unwrap_or_default());
            response::respond_xml(request, xml)
        }
        Target::Page => {
            let url = request_url(&request, addr);
            let page = site.render_page(request.url(), Some(url.as_str()));
            if page.status == 404 {
                log!("serve"; "404 {}", request.url());
            } else {
                debug!("serve"; "{} -> {}", request.url(), page.key);
            }
            response::respond_page(request, page)
        }
    }
}

/// Full URL of the request, from its Host header or the bound address.
fn request_url(request: &Request, addr: SocketAddr) -> String {
    let host = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Host"))
        .map(|h| h.value.to_string())
        .unwrap_or_else(|| addr.to_string());
    format!("http://{}{}", host, request.url())
}
