//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, file serving,
//! and the finalization every response goes through.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Raw (still percent-encoded) URL path
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// Never fails: every problem becomes an HTTP status, and every response
/// carries the CORS header.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // The body is never read
    let (parts, _) = req.into_parts();

    let response = match check_http_method(&parts.method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: parts.uri.path(),
                query: parts.uri.query(),
                is_head: parts.method == Method::HEAD,
            };
            static_files::serve_path(&ctx, &state).await
        }
    };

    Ok(http::finalize(response))
}

/// Return a 501 response for anything but GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => Some(http::build_error_response(
            StatusCode::NOT_IMPLEMENTED,
            &format!("Unsupported method ('{method}')"),
            false,
        )),
    }
}
