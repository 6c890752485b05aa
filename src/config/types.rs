// Configuration types module
// Defines the startup configuration data structure

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Directory whose contents are served
    pub root: PathBuf,
}
