//! Application configuration

use std::env;
use thiserror::Error;

/// Environment variable the function host uses to hand out the listening port
pub const PORT_ENV_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

/// Port used for local development when the host does not provide one
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Where the listening port came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSource {
    /// [`PORT_ENV_VAR`] was unset
    Default,
    /// Taken from [`PORT_ENV_VAR`]
    Env,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the handler listens on
    pub port: u16,

    pub port_source: PortSource,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (port, port_source) = match lookup(PORT_ENV_VAR) {
            None => (DEFAULT_PORT, PortSource::Default),
            Some(raw) => {
                let port = raw.parse().map_err(|_| ConfigError::InvalidPort {
                    var: PORT_ENV_VAR,
                    value: raw.clone(),
                })?;
                (port, PortSource::Env)
            }
        };

        Ok(Self { port, port_source })
    }

    /// Socket address to bind, on all interfaces
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| {
            assert_eq!(name, PORT_ENV_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_default_port_when_unset() {
        let config = AppConfig::from_lookup(lookup(None)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.port_source, PortSource::Default);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_from_env() {
        let config = AppConfig::from_lookup(lookup(Some("7071"))).unwrap();
        assert_eq!(config.port, 7071);
        assert_eq!(config.port_source, PortSource::Env);
        assert_eq!(config.bind_addr(), "0.0.0.0:7071");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for raw in ["", "http", "70000", "-1", " 7071 "] {
            let err = AppConfig::from_lookup(lookup(Some(raw))).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidPort {
                    var: PORT_ENV_VAR,
                    value: raw.to_string()
                }
            );
        }
    }
}
