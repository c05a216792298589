//! Routing module
//!
//! Ordered route table mapping request paths to the landing page, the root
//! redirect, or one of the script request kinds.

mod matcher;

pub use matcher::{default_routes, match_route, Dispatch, Route, RoutePattern, RouteTarget};
