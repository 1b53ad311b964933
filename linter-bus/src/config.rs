//! Rules service configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "LINTER_BIND_ADDR";

/// Errors reading the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidBindAddr { var: &'static str, value: String },
}

/// Configuration for the HTTP rules service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the service listens on.
    pub bind_addr: SocketAddr,
}

impl ServiceConfig {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?;
        }

        Ok(config)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn bind_addr_from_env() {
        let config = ServiceConfig::from_lookup(|var| {
            (var == BIND_ADDR_VAR).then(|| " 0.0.0.0:8080 ".to_string())
        })
        .unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn invalid_bind_addr() {
        let err = ServiceConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: "localhost".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#"invalid LINTER_BIND_ADDR: "localhost" is not a socket address"#
        );
    }
}
