//! HTTP response handlers.

use crate::render::RenderedPage;
use crate::utils::mime::types::{CSS, HTML, PLAIN, XML};
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a rendered page, 404 for the not-found page.
pub fn respond_page(request: Request, page: RenderedPage) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, page.status, HTML);
    }
    send_body(request, page.status, HTML, page.html.into_bytes())
}

/// Respond with the embedded stylesheet.
pub fn respond_css(request: Request, css: &'static str) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, CSS);
    }
    send_body(request, 200, CSS, css.as_bytes().to_vec())
}

/// Respond with sitemap XML.
pub fn respond_xml(request: Request, xml: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, XML);
    }
    send_body(request, 200, XML, xml.into_bytes())
}

/// Respond with 405 for anything but GET and HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
