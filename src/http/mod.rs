//! HTTP protocol layer module
//!
//! hyper response builders, kept apart from the routing and script logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_html_response,
    build_redirect_response_with_code, build_script_response,
};
