use serde::Deserialize;
use std::time::Duration;

use crate::adapters::outbound::UpstreamConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Inbound API
    pub listen_addr: String,
    pub debug: bool,

    // Upstream employee service
    pub upstream_url: String,
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8111".to_string(),
            debug: false,
            upstream_url: "http://localhost:8112/api/v1/employee".to_string(),
            upstream_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Connection settings for the upstream directory.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            base_url: self.upstream_url.clone(),
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("EMPLOYEE_API_UPSTREAM_URL must not be blank")]
    BlankUpstreamUrl,
}

pub fn load_config() -> anyhow::Result<Config> {
    Ok(load_config_from(|key| std::env::var(key).ok())?)
}

/// Build the configuration from an arbitrary variable lookup.
pub fn load_config_from<F>(var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Config::default();

    let listen_addr = var("EMPLOYEE_API_LISTEN_ADDR").unwrap_or(defaults.listen_addr);

    let debug = var("DEBUG").is_some();

    let upstream_url = var("EMPLOYEE_API_UPSTREAM_URL").unwrap_or(defaults.upstream_url);
    if upstream_url.trim().is_empty() {
        return Err(ConfigError::BlankUpstreamUrl);
    }

    let upstream_timeout_secs = var("EMPLOYEE_API_UPSTREAM_TIMEOUT_SECS")
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.upstream_timeout_secs);

    Ok(Config {
        listen_addr,
        debug,
        upstream_url,
        upstream_timeout_secs,
    })
}
