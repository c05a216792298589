// Configuration module entry point
// Loads the typed configuration and builds the immutable application state

mod state;
mod types;

use std::net::SocketAddr;

use config::builder::DefaultState;
use config::ConfigBuilder;

use crate::error::SiteError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

/// Environment variable prefix, e.g. `MOCK_SITE__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "MOCK_SITE";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, SiteError> {
        let settings = Self::with_defaults()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration made of the built-in defaults only
    pub fn defaults() -> Result<Self, SiteError> {
        Ok(Self::with_defaults()?.build()?.try_deserialize()?)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("site.base_url", "http://localhost:8080")?
            .set_default("site.landing_path", "/agent-os")?
            .set_default("site.api_prefix", "/agent-os/api")?
            .set_default("site.scripts_root", "testing/setups_local")?
            .set_default("site.repository_depth", 2)?
            .set_default("site.contain_paths", false)
    }

    /// Check the values the route table is built from
    pub fn validate(&self) -> Result<(), SiteError> {
        let site = &self.site;
        if !site.landing_path.starts_with('/') {
            return Err(SiteError::InvalidConfig(format!(
                "site.landing_path must start with '/': {:?}",
                site.landing_path
            )));
        }
        if !site.api_prefix.is_empty() && !site.api_prefix.starts_with('/') {
            return Err(SiteError::InvalidConfig(format!(
                "site.api_prefix must be empty or start with '/': {:?}",
                site.api_prefix
            )));
        }
        if site.api_prefix.ends_with('/') {
            return Err(SiteError::InvalidConfig(format!(
                "site.api_prefix must not end with '/': {:?}",
                site.api_prefix
            )));
        }
        if site.base_url.is_empty() {
            return Err(SiteError::InvalidConfig(
                "site.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, SiteError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| SiteError::InvalidAddress { addr, source })
    }
}
