use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

#[cfg(test)]
mod test_support;

fn main() -> ExitCode {
    exit_code(run())
}

/// Startup failures are logged and end the process non-zero
fn exit_code(result: Result<(), Box<dyn std::error::Error>>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Missing root is fatal before anything is bound
    let state = Arc::new(config::AppState::new(cfg)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(state))
}

async fn async_main(state: Arc<config::AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.socket_addr();
    let listener =
        server::create_listener(addr).map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    logger::log_server_start(&addr, &state.root, server::lan_address());

    server::serve(listener, state, server::shutdown_signal()).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempRoot;

    #[tokio::test]
    async fn test_occupied_port_is_fatal() {
        let root = TempRoot::new("main-occupied");
        root.mkdir("dist");
        let occupied =
            server::create_listener(std::net::SocketAddr::new(config::BIND_HOST, 0)).unwrap();
        let port = occupied.local_addr().unwrap().port();

        let state = config::AppState::new(config::Config {
            port,
            root: root.path().join("dist"),
        })
        .unwrap();

        let err = async_main(Arc::new(state)).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to bind"), "{err}");
        assert_eq!(
            format!("{:?}", exit_code(Err(err))),
            format!("{:?}", ExitCode::FAILURE)
        );
    }

    #[test]
    fn test_clean_exit_is_success() {
        assert_eq!(
            format!("{:?}", exit_code(Ok(()))),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }
}
