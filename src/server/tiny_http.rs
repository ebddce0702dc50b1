//! `tiny_http` server adapter
//!
//! Routes preview requests, parses bodies and converts handler results
//! into responses. Certificates are re-read from the source file on every
//! request so edits show up on refresh.

use std::io::{Cursor, Read as _};
use std::path::PathBuf;

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use certview::api::{self, ApiError, ApiResponse, RenderCardRequest};
use certview::config::{self, CardConfig};
use certview::loader;
use certview::models::Certificate;
use certview::render::{HtmlRenderer, STYLE_CSS, Stylesheet};
use certview::view::CertificateView;

/// What the preview server renders
#[derive(Debug, Clone)]
pub struct PreviewState {
    /// Certificate file to serve
    pub source: PathBuf,
    /// Card configuration
    pub card: CardConfig,
}

/// A transport-independent response
#[derive(Debug)]
pub struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    fn css(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/css; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }

    fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let json =
            serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        Self {
            status,
            content_type: "application/json",
            body: json.into_bytes(),
        }
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body).with_status_code(StatusCode(self.status));
        if let Ok(header) = Header::from_bytes("Content-Type", self.content_type) {
            response = response.with_header(header);
        }
        response
    }
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle one request
pub fn handle_request(request: &mut Request, state: &PreviewState) -> Response<Cursor<Vec<u8>>> {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    if method == Method::Post {
        if let Err(e) = request.as_reader().read_to_string(&mut body) {
            let err = ApiError::InvalidRequest(format!("failed to read body: {e}"));
            return error_reply(&err).into_response();
        }
    }

    log::debug!("{method} {url}");
    route(&method, &url, &body, state).into_response()
}

/// Map a request to a reply
///
/// This is the main routing function that maps URL paths to handlers.
pub fn route(method: &Method, url: &str, body: &str, state: &PreviewState) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    if let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api")) {
        return route_api(method, api_path, body, state);
    }

    match (method, path) {
        (&Method::Get, "/") => gallery_page(state),
        (&Method::Get, "/style.css") => Reply::css(STYLE_CSS),
        (&Method::Get, _) => match state.card.detail_id_from_path(path) {
            Some(id) => detail_page(&id, state),
            None => not_found_page(method, path),
        },
        _ => not_found_page(method, path),
    }
}

fn route_api(method: &Method, api_path: &str, body: &str, state: &PreviewState) -> Reply {
    match (method, api_path) {
        (&Method::Get, "/cards") => match load(state) {
            Ok(certs) => success_reply(api::list_cards(&certs, &state.card)),
            Err(e) => error_reply(&e),
        },

        // POST /render - render an ad-hoc certificate
        (&Method::Post, "/render") => match serde_json::from_str::<RenderCardRequest>(body) {
            Ok(req) => success_reply(api::render_card(&req, &state.card)),
            Err(e) => error_reply(&ApiError::InvalidRequest(e.to_string())),
        },

        // Card detail: GET /cards/{id}
        _ if method == &Method::Get && api_path.starts_with("/cards/") => {
            let segment = api_path.strip_prefix("/cards/").unwrap_or("");
            if segment.contains('/') {
                return not_found_reply(method, api_path);
            }
            let Some(id) = config::decode_segment(segment) else {
                return error_reply(&ApiError::InvalidRequest(format!(
                    "certificate id '{segment}' is not valid UTF-8"
                )));
            };
            let result = load(state).and_then(|certs| api::get_card(&certs, &id, &state.card));
            match result {
                Ok(card) => success_reply(card),
                Err(e) => error_reply(&e),
            }
        },

        _ => not_found_reply(method, api_path),
    }
}

fn load(state: &PreviewState) -> Result<Vec<Certificate>, ApiError> {
    loader::load_file(&state.source).map_err(|e| {
        log::warn!("{e}");
        ApiError::from(e)
    })
}

// =============================================================================
// PAGES
// =============================================================================

fn renderer() -> HtmlRenderer {
    HtmlRenderer::new().with_stylesheet(Stylesheet::Linked("/style.css"))
}

fn gallery_page(state: &PreviewState) -> Reply {
    match load(state) {
        Ok(certs) => {
            let views: Vec<CertificateView> =
                certs.iter().map(|c| CertificateView::new(c, &state.card)).collect();
            Reply::html(200, renderer().render_page(&state.card.brand, &views))
        },
        Err(e) => Reply::html(e.status_code(), error_page(&e)),
    }
}

fn detail_page(id: &str, state: &PreviewState) -> Reply {
    let found = load(state).and_then(|certs| {
        loader::find(&certs, id)
            .map(|c| CertificateView::new(c, &state.card))
            .ok_or_else(|| ApiError::CertificateNotFound(id.to_string()))
    });
    match found {
        Ok(view) => {
            let title = format!("{} · {}", state.card.brand, view.role);
            Reply::html(200, renderer().render_page(&title, &[view]))
        },
        Err(e) => Reply::html(e.status_code(), error_page(&e)),
    }
}

fn error_page(err: &ApiError) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<body>\n<p class=\"empty\">{}</p>\n</body>\n</html>\n",
        certview::render::escape_html(&err.to_string())
    )
}

fn not_found_page(method: &Method, path: &str) -> Reply {
    Reply::html(404, error_page(&unknown_route(method, path)))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn success_reply<T: Serialize>(data: T) -> Reply {
    Reply::json(&ApiResponse::success(data), 200)
}

fn error_reply(error: &ApiError) -> Reply {
    Reply::json(&ApiResponse::error(error), error.status_code())
}

fn not_found_reply(method: &Method, api_path: &str) -> Reply {
    error_reply(&unknown_route(method, api_path))
}

fn unknown_route(method: &Method, path: &str) -> ApiError {
    ApiError::UnknownRoute {
        method: method.to_string(),
        path: path.to_string(),
    }
}
