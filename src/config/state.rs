// Application state module
// Immutable per-process state shared by every connection

use super::types::Config;
use crate::handler::landing;
use crate::routing::{self, Route};
use crate::script::SiteRoots;

/// Application state
///
/// Built once at startup. Nothing in here changes while serving, so
/// connections share it through an `Arc` without locking.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub roots: SiteRoots,
    pub routes: Vec<Route>,
    pub landing_html: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let site = &config.site;
        Self {
            config: config.clone(),
            roots: site.roots(),
            routes: routing::default_routes(&site.landing_path, &site.api_prefix),
            landing_html: landing::render(&site.base_url, &site.api_prefix),
        }
    }

    /// State serving from explicit roots instead of the configured ones
    pub fn with_roots(config: &Config, roots: SiteRoots) -> Self {
        Self {
            roots,
            ..Self::new(config)
        }
    }
}
