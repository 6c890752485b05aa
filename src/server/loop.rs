// Server loop module
// Accepts connections until shutdown is requested, then drains them

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// How long open connections get to finish once shutdown starts
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Serve connections from `listener` until `shutdown` resolves.
///
/// The listener is closed as soon as shutdown begins; connections still open
/// after [`SHUTDOWN_GRACE`] are abandoned.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F)
where
    F: Future<Output = ()>,
{
    let graceful = GracefulShutdown::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _peer_addr)) => {
                        handle_connection(stream, Arc::clone(&state), &graceful);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => break,
        }
    }

    drop(listener);
    logger::log_shutdown();

    tokio::select! {
        () = graceful.shutdown() => {}
        () = tokio::time::sleep(SHUTDOWN_GRACE) => {
            logger::log_warning("Open connections did not finish in time, abandoning them");
        }
    }
}
