use super::{ConfigError, DatabaseConfig, GslbConfig, LoggingConfig, ServerConfig};
use http::HeaderName;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Main configuration structure for Ferrous GSLB
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gslb: GslbConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub http_port: Option<u16>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                    path: path.to_string(),
                    source,
                })?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.http_port {
            self.server.http_port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_port == 0 {
            return Err(ConfigError::Validation(
                "server.http_port must be non-zero".to_string(),
            ));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.bind_address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if HeaderName::from_bytes(self.gslb.client_address_header.as_bytes()).is_err() {
            return Err(ConfigError::Validation(format!(
                "gslb.client_address_header '{}' is not a valid header name",
                self.gslb.client_address_header
            )));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if !self.logging.has_known_level() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }
}
