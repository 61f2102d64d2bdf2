//! Pilot configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the synchronization pilot.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PilotConfig {
    /// Display name of the account this process plays for.
    ///
    /// Required: color resolution compares it against the bottom
    /// player panel, and guessing an identity is not an option.
    local_name: String,

    /// Decision service endpoint.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Seconds before an in-flight decision request times out.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// Play uniformly random legal moves instead of asking the
    /// decision service.
    #[serde(default)]
    random_moves: bool,
}

fn default_endpoint() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl PilotConfig {
    /// Creates a configuration for `local_name` with defaults.
    pub fn new(local_name: String) -> Self {
        Self {
            local_name,
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            random_moves: false,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.local_name.is_empty() {
            return Err(ConfigError::new(
                "local_name must not be empty".to_string(),
            ));
        }

        info!(local_name = %config.local_name, "Config loaded successfully");
        Ok(config)
    }

    /// Sets the local display name.
    pub fn set_local_name(&mut self, local_name: String) {
        self.local_name = local_name;
    }

    /// Sets the decision service endpoint.
    pub fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = endpoint;
    }

    /// Switches between random and remote-decision mode.
    pub fn set_random_moves(&mut self, random: bool) {
        self.random_moves = random;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
