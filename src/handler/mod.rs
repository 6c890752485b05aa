//! Request handler module
//!
//! Method validation, path resolution beneath the root, and file or listing responses.

pub mod listing;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
