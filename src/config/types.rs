// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::script::SiteRoots;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Mock site configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Base URL printed in the landing page's install commands
    pub base_url: String,
    /// Path of the landing page; `/` redirects here
    pub landing_path: String,
    /// Path prefix of the script and repository file routes
    pub api_prefix: String,
    /// Directory holding `setup.sh` and `setup-{tool}.sh`
    pub scripts_root: String,
    /// Directory served by the catch-all route.
    /// Derived from `scripts_root` and `repository_depth` when unset.
    #[serde(default)]
    pub repository_root: Option<String>,
    /// How many parents above `scripts_root` the repository root sits
    pub repository_depth: usize,
    /// Refuse to serve files that resolve outside their root
    pub contain_paths: bool,
}

impl SiteConfig {
    pub fn roots(&self) -> SiteRoots {
        match &self.repository_root {
            Some(repository_root) => SiteRoots::new(&self.scripts_root, repository_root),
            None => SiteRoots::with_repository_depth(&self.scripts_root, self.repository_depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn site(repository_root: Option<&str>) -> SiteConfig {
        SiteConfig {
            base_url: "http://localhost:8080".to_string(),
            landing_path: "/agent-os".to_string(),
            api_prefix: "/agent-os/api".to_string(),
            scripts_root: "/work/agent-os/testing/setups_local".to_string(),
            repository_root: repository_root.map(String::from),
            repository_depth: 2,
            contain_paths: false,
        }
    }

    #[test]
    fn test_roots_from_depth() {
        let roots = site(None).roots();
        assert_eq!(
            roots.scripts_root(),
            Path::new("/work/agent-os/testing/setups_local")
        );
        assert_eq!(roots.repository_root(), Path::new("/work/agent-os"));
    }

    #[test]
    fn test_roots_explicit_repository() {
        let roots = site(Some("/elsewhere")).roots();
        assert_eq!(roots.repository_root(), Path::new("/elsewhere"));
    }
}
