//! Local stand-in for the install website.
//!
//! Serves setup scripts and repository files from the working tree so
//! installation scripts can be tested without the live site.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod script;
pub mod server;
