//! Environment configuration

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use traktamente_core::{AllowanceDirectory, DirectoryError};

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 9000;

/// Host used when `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid port number
    #[error("Invalid PORT {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    /// `HOST` is not an IP address
    #[error("Invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: IpAddr,

    /// Bind port
    pub port: u16,

    /// Alternate dataset file; the bundled dataset is used when unset
    pub data_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            data_path: None,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `TRAKTAMENTE_DATA` from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort {
                    reason: e.to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let host_value = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_value
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_value.clone()))?;

        Ok(ServerConfig {
            host,
            port,
            data_path: get("TRAKTAMENTE_DATA").map(PathBuf::from),
        })
    }

    /// Address to listen on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Load the configured dataset
    pub fn load_directory(&self) -> Result<AllowanceDirectory, DirectoryError> {
        match &self.data_path {
            Some(path) => AllowanceDirectory::from_path(path),
            None => AllowanceDirectory::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn test_port_from_env() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_port_uses_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "ninety")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "ninety"));

        let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_ipv6_host() {
        let config =
            ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "9001")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "[::1]:9001");
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHost("localhost".to_string()));
    }

    #[test]
    fn test_data_path() {
        let config =
            ServerConfig::from_lookup(lookup(&[("TRAKTAMENTE_DATA", "/srv/rates.json")])).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("/srv/rates.json")));
    }

    #[test]
    fn test_load_bundled_directory() {
        let directory = ServerConfig::default().load_directory().unwrap();
        assert!(!directory.is_empty());
    }
}
