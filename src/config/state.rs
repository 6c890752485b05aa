// Application state module
// Immutable per-process state shared by every connection task

use std::io;
use std::path::PathBuf;

use super::types::Config;
use crate::http::mime::ContentTypeTable;

/// Application state
///
/// Built once before the listener is bound and handed to connections behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Canonical form of `config.root`; every served path must stay beneath it
    pub root: PathBuf,
    pub content_types: ContentTypeTable,
}

impl AppState {
    /// Create `AppState`, failing if the root directory is missing or not a directory
    pub fn new(config: Config) -> io::Result<Self> {
        let root = config.root.canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!(
                    "Root directory '{}' is not accessible: {e}",
                    config.root.display()
                ),
            )
        })?;

        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Root path '{}' is not a directory", config.root.display()),
            ));
        }

        Ok(Self {
            config,
            root,
            content_types: ContentTypeTable::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempRoot;

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempRoot::new("state-missing");
        let config = Config {
            port: 0,
            root: dir.path().join("nope"),
        };

        let err = AppState::new(config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let dir = TempRoot::new("state-file");
        let file = dir.write("not-a-dir.txt", b"x");
        let config = Config { port: 0, root: file };

        let err = AppState::new(config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_root_is_canonicalized() {
        let dir = TempRoot::new("state-ok");
        dir.mkdir("dist");
        let config = Config {
            port: 0,
            root: dir.path().join("dist").join(".").join("..").join("dist"),
        };

        let state = AppState::new(config).unwrap();
        assert_eq!(state.root, dir.path().join("dist").canonicalize().unwrap());
    }
}
