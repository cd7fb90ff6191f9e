//! Configuration for the SandhiIO daemon
//!
//! Loads configuration from a TOML file with the minimal parameters needed
//! for single-sender stream ingestion.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
}

/// TCP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// TCP bind address for the inbound joint stream (IPv4)
    ///
    /// Examples:
    /// - `127.0.0.1:10000` - Localhost only (default)
    /// - `0.0.0.0:10000` - All interfaces
    pub bind_address: String,
}

impl NetworkConfig {
    /// Parse the configured bind address.
    ///
    /// The transport is IPv4 only; IPv6 addresses are rejected here rather
    /// than failing later inside the listener setup.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr: SocketAddr = self
            .bind_address
            .parse()
            .map_err(|_| Error::InvalidAddress(self.bind_address.clone()))?;
        if !addr.is_ipv4() {
            return Err(Error::InvalidAddress(self.bind_address.clone()));
        }
        Ok(addr)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log output (stdout, stderr, or file path)
    pub output: String,
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default configuration: loopback listener on port 10000
    ///
    /// Suitable for a simulation sender running on the same machine.
    /// Production deployments should use a proper TOML configuration file.
    pub fn loopback_defaults() -> Self {
        Self {
            network: NetworkConfig {
                bind_address: "127.0.0.1:10000".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                output: "stdout".to_string(),
            },
        }
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::loopback_defaults()
    }
}
