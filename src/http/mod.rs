//! HTTP protocol layer module
//!
//! Response builders and content-type detection, independent of how paths are resolved.

pub mod mime;
pub mod response;

// Re-export commonly used functions
pub use response::{
    build_error_response, build_file_response, build_html_response, build_redirect_response,
    finalize,
};
