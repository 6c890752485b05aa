//! Static file serving module
//!
//! Maps request paths to files beneath the root directory and builds file responses.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use percent_encoding::percent_decode_str;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Tried in order when a directory is requested
pub const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Why a request could not be answered with content
#[derive(Debug)]
enum ServeError {
    Io(io::Error),
    OutsideRoot(PathBuf),
}

impl From<io::Error> for ServeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Serve whatever the request path names beneath the root
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let decoded = decode_path(ctx.path);
    let candidate = translate_path(&state.root, &decoded);

    match resolve(ctx, state, &decoded, &candidate).await {
        Ok(response) => response,
        Err(err) => error_response(ctx, err),
    }
}

async fn resolve(
    ctx: &RequestContext<'_>,
    state: &AppState,
    decoded: &str,
    candidate: &Path,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let metadata = fs::metadata(candidate).await?;

    if metadata.is_dir() {
        if !ctx.path.ends_with('/') {
            return Ok(http::build_redirect_response(&directory_location(ctx)));
        }

        for index_file in INDEX_FILES {
            let index_path = candidate.join(index_file);
            if fs::metadata(&index_path).await.is_ok_and(|m| m.is_file()) {
                return serve_file(ctx, state, &index_path).await;
            }
        }

        let dir = confine(&state.root, candidate).await?;
        return match listing::render_listing(&dir, decoded).await {
            Ok(html) => Ok(http::build_html_response(html, ctx.is_head)),
            Err(e) => {
                logger::log_warning(&format!(
                    "Failed to list directory '{}': {e}",
                    dir.display()
                ));
                Ok(http::build_error_response(
                    StatusCode::NOT_FOUND,
                    "No permission to list directory",
                    ctx.is_head,
                ))
            }
        };
    }

    // A file name followed by a slash names nothing
    if decoded.ends_with('/') || !metadata.is_file() {
        return Err(io::Error::from(io::ErrorKind::NotFound).into());
    }

    serve_file(ctx, state, candidate).await
}

/// Read a file and build its response; the content type follows the requested name
async fn serve_file(
    ctx: &RequestContext<'_>,
    state: &AppState,
    requested: &Path,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let file_path = confine(&state.root, requested).await?;

    let content = fs::read(&file_path).await.inspect_err(|e| {
        if e.kind() != io::ErrorKind::NotFound {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
        }
    })?;
    let last_modified = fs::metadata(&file_path)
        .await
        .ok()
        .and_then(|m| m.modified().ok());
    let content_type = state.content_types.content_type_for(requested);

    Ok(http::build_file_response(
        Bytes::from(content),
        content_type,
        last_modified,
        ctx.is_head,
    ))
}

/// Canonicalize `path` and ensure it is still beneath `root`
///
/// Catches symlinks that point outside the served tree.
async fn confine(root: &Path, path: &Path) -> Result<PathBuf, ServeError> {
    let canonical = fs::canonicalize(path).await?;
    if canonical.starts_with(root) {
        Ok(canonical)
    } else {
        Err(ServeError::OutsideRoot(canonical))
    }
}

fn error_response(ctx: &RequestContext<'_>, err: ServeError) -> Response<Full<Bytes>> {
    match err {
        ServeError::Io(e) => {
            let status = status_for_io_error(&e);
            let message = if status == StatusCode::FORBIDDEN {
                "Permission denied"
            } else {
                "File not found"
            };
            http::build_error_response(status, message, ctx.is_head)
        }
        ServeError::OutsideRoot(target) => {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                ctx.path,
                target.display()
            ));
            http::build_error_response(StatusCode::NOT_FOUND, "File not found", ctx.is_head)
        }
    }
}

/// Map a filesystem error to the status the client sees
pub fn status_for_io_error(err: &io::Error) -> StatusCode {
    match err.kind() {
        io::ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
        _ => StatusCode::NOT_FOUND,
    }
}

/// Percent-decode the URL path; invalid UTF-8 is replaced rather than rejected
pub fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Join the decoded URL path onto `root`, one plain segment at a time
///
/// Empty, `.` and `..` segments are dropped, as are segments holding a backslash
/// or NUL and anything the platform would read as more than a single file name
/// (drive prefixes, separators).
pub fn translate_path(root: &Path, decoded: &str) -> PathBuf {
    decoded
        .split('/')
        .filter(|segment| is_plain_segment(segment))
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

fn is_plain_segment(segment: &str) -> bool {
    if segment.contains(['\\', '\0']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Location for the trailing-slash redirect, keeping the query string
///
/// Leading slashes collapse to one so `//host` cannot become a
/// protocol-relative link to another site.
fn directory_location(ctx: &RequestContext<'_>) -> String {
    let path = format!("/{}", ctx.path.trim_start_matches('/'));
    match ctx.query {
        Some(query) => format!("{path}/?{query}"),
        None => format!("{path}/"),
    }
}
