//! Startup error types
//!
//! Request handling never fails; these only cover loading configuration and
//! bringing the server up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
