//! Request handler module
//!
//! - `router`: HTTP entry point and dispatch
//! - `scripts`: setup scripts and repository files
//! - `landing`: the static landing page

pub mod landing;
pub mod router;
pub mod scripts;

pub use router::handle_request;
