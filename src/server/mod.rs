// Server module entry point
// Listener setup, connection handling, signal handling and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is exposed as server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::{create_listener, lan_address};
pub use server_loop::serve;
pub use signal::shutdown_signal;
