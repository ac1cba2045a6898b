use std::net::Ipv4Addr;

use crate::{ConfigError, FromEnv, env_parse_or};

const DEFAULT_PORT: u16 = 8080;

/// Listen address for the HTTP server (`HOST`, `PORT`)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string handed to the TCP listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let Self { host, port } = Self::default();
        Ok(Self {
            host: env_parse_or("HOST", host)?,
            port: env_parse_or("PORT", port)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listens_on_all_interfaces_by_default() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.address(), "0.0.0.0:8080");
        });
    }

    #[test]
    fn test_host_and_port_overrides() {
        temp_env::with_vars([("HOST", Some("127.0.0.1")), ("PORT", Some("3000"))], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.port, 3000);
            assert_eq!(config.address(), "127.0.0.1:3000");
        });
    }

    #[test]
    fn test_bad_port_names_the_variable() {
        for raw in ["not_a_number", "99999"] {
            temp_env::with_vars([("HOST", None), ("PORT", Some(raw))], || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(matches!(err, ConfigError::ParseError { ref key, .. } if key == "PORT"));
            });
        }
    }
}
