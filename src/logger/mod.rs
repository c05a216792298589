//! Logger module
//!
//! Provides logging utilities for the mock site server including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Not-found diagnostics for the operator console
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::script::SiteRoots;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, roots: &SiteRoots) {
    let site = &config.site;
    write_info("======================================");
    write_info("Mock site server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Landing page: {}{}", site.base_url, site.landing_path));
    write_info(&format!("Setup scripts directory: {}", roots.scripts_root().display()));
    write_info(&format!("Local repo directory: {}", roots.repository_root().display()));
    if site.contain_paths {
        write_info("Path containment: on (requests cannot leave their root)");
    } else {
        write_info("Path containment: off (paths are served as requested)");
    }
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(message);
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
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

/// Diagnostic for a file that could not be served
pub fn log_not_found(path: &Path) {
    write_error(&format!("File not found: {}", path.display()));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_shutdown() {
    write_info("\n[Shutdown] Stop signal received, no longer accepting connections");
}
