//! Configuration module for Ferrous GSLB
//!
//! This module contains all configuration structures organized by domain:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding for the remote-backend endpoint
//! - `gslb`: Selection settings (client address header, initial health state)
//! - `database`: Record store configuration
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod gslb;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use gslb::GslbConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
