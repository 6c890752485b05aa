//! MIME type detection module
//!
//! Returns the Content-Type for a served file based on its extension.
//! Lookups fall through a small fixed overlay to the `mime_guess` table.

use std::collections::HashMap;
use std::path::Path;

/// Content-Type for unknown or missing extensions
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Entries that always win over the platform table.
/// Browsers refuse to instantiate wasm or execute scripts served under other types.
const OVERRIDES: [(&str, &str); 2] = [
    ("wasm", "application/wasm"),
    ("js", "application/javascript"),
];

/// Read-only extension to Content-Type mapping
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    overrides: HashMap<&'static str, &'static str>,
}

impl ContentTypeTable {
    pub fn new() -> Self {
        Self {
            overrides: OVERRIDES.into_iter().collect(),
        }
    }

    /// Get MIME Content-Type for a file path
    ///
    /// Extensions are matched case-insensitively.
    pub fn content_type_for(&self, path: &Path) -> &'static str {
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return FALLBACK_CONTENT_TYPE;
        };
        let extension = extension.to_ascii_lowercase();

        if let Some(&content_type) = self.overrides.get(extension.as_str()) {
            return content_type;
        }

        mime_guess::from_ext(&extension)
            .first_raw()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        Self::new()
    }
}
