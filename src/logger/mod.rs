//! Logger module
//!
//! Console logging for the server lifecycle:
//! - Startup banner and LAN hint
//! - Errors and warnings on stderr
//! - Shutdown notice

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Write to info log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_server_start(addr: &SocketAddr, root: &Path, lan_ip: IpAddr) {
    write_info("======================================");
    write_info("Static asset server started");
    write_info(&format!("Serving directory: {}", root.display()));
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Point your device to: http://{}",
        SocketAddr::new(lan_ip, addr.port())
    ));
    write_info("Press Ctrl+C to stop");
    write_info("======================================\n");
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received"));
}

pub fn log_shutdown() {
    write_info("Shutting down.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
