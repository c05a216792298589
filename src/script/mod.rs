//! Script resolution core
//!
//! Maps a logical request to a file under one of the configured roots,
//! reads it, and turns the outcome into a plain-text response:
//! - `resolver`: request kind → absolute path (pure)
//! - `reader`: path → file content or absence
//! - `response`: outcome → status + body

pub mod reader;
pub mod resolver;
pub mod response;

pub use reader::{read, ReadOutcome};
pub use resolver::{resolve, RequestKind, SiteRoots};
pub use response::{build, ScriptResponse, ScriptStatus, TEXT_PLAIN};
