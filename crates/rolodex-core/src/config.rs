//! Runtime configuration, resolved once at startup and passed down.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the user directory lives and whether interception is active.
///
/// There is no platform or environment sniffing anywhere else: everything
/// that used to be an ambient switch is an explicit field here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base endpoint for the user directory API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Answer matched requests from the fixture rules instead of the
    /// network.
    #[serde(default)]
    pub interception_enabled: bool,
    /// Fixed latency added to every mock response, in milliseconds.
    /// Only meaningful while interception is enabled.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_mock_delay_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            interception_enabled: false,
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("baseUrl must not be empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "baseUrl must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }
        Ok(())
    }

    /// Collection endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }

    /// Single record endpoint.
    pub fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url.trim_end_matches('/'), id)
    }
}
