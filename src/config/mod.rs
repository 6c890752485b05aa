// Configuration module entry point
// Loads the startup configuration and builds the shared application state

mod state;
mod types;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// The server always listens on every interface
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROOT: &str = "dist";

const CONFIG_FILE: &str = "serve";
const ENV_PREFIX: &str = "SERVE";

impl Config {
    /// Load configuration from `serve.*` in the working directory and `SERVE_*` variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from specified file path (extension optional)
    /// Missing files are not an error; defaults apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("root", DEFAULT_ROOT)?
            .build()?;

        settings.try_deserialize()
    }

    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(BIND_HOST, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempRoot;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("definitely-not-a-config-file").unwrap();
        // SERVE_* variables would legitimately override the defaults
        if std::env::var_os("SERVE_PORT").is_none() {
            assert_eq!(cfg.port, DEFAULT_PORT);
        }
        if std::env::var_os("SERVE_ROOT").is_none() {
            assert_eq!(cfg.root, PathBuf::from(DEFAULT_ROOT));
        }
    }

    #[test]
    fn test_file_overrides_defaults() {
        if std::env::var_os("SERVE_PORT").is_some() || std::env::var_os("SERVE_ROOT").is_some() {
            return;
        }
        let dir = TempRoot::new("config");
        let file = dir.write("serve.toml", b"port = 9090\nroot = \"public\"\n");

        let cfg = Config::load_from(file.to_str().unwrap()).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.root, PathBuf::from("public"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        if std::env::var_os("SERVE_PORT").is_some() {
            return;
        }
        let dir = TempRoot::new("config-invalid");
        let file = dir.write("serve.toml", b"port = \"not-a-port\"\n");

        assert!(Config::load_from(file.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let cfg = Config {
            port: 8080,
            root: PathBuf::from("dist"),
        };
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
