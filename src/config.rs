//! Relay configuration, read once from the environment at startup

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RelayError, Result};

pub const TEAMS_WEBHOOK_URL_ENV: &str = "TEAMS_WEBHOOK_URL";
pub const PORT_ENV: &str = "PORT";
pub const FORWARD_TIMEOUT_ENV: &str = "FORWARD_TIMEOUT_SECS";
pub const LOG_DIR_ENV: &str = "LOG_DIR";

pub const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Teams incoming-webhook URL every card is posted to.
    pub teams_webhook_url: String,
    pub port: u16,
    /// Upper bound for the outbound POST. `None` waits indefinitely.
    pub forward_timeout: Option<Duration>,
    /// When set, logs are also written to daily files in this directory.
    pub log_dir: Option<PathBuf>,
}

impl RelayConfig {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let teams_webhook_url = lookup(TEAMS_WEBHOOK_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                RelayError::Config(format!(
                    "Environment variable {} must be set.",
                    TEAMS_WEBHOOK_URL_ENV
                ))
            })?;

        let port = match lookup(PORT_ENV) {
            Some(value) => value.trim().parse::<u16>().map_err(|e| {
                RelayError::Config(format!("Invalid {} '{}': {}", PORT_ENV, value, e))
            })?,
            None => DEFAULT_PORT,
        };

        let forward_timeout = match lookup(FORWARD_TIMEOUT_ENV) {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|e| {
                    RelayError::Config(format!(
                        "Invalid {} '{}': {}",
                        FORWARD_TIMEOUT_ENV, value, e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_dir = lookup(LOG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            teams_webhook_url,
            port,
            forward_timeout,
            log_dir,
        })
    }

    /// Address the server listens on (all interfaces).
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_webhook_url_is_an_error() {
        let result = RelayConfig::from_lookup(lookup_from(&[(PORT_ENV, "9000")]));
        match result {
            Err(RelayError::Config(msg)) => assert!(msg.contains(TEAMS_WEBHOOK_URL_ENV)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn empty_webhook_url_is_an_error() {
        let result = RelayConfig::from_lookup(lookup_from(&[(TEAMS_WEBHOOK_URL_ENV, "  ")]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn port_defaults_to_8090() {
        let config = RelayConfig::from_lookup(lookup_from(&[(
            TEAMS_WEBHOOK_URL_ENV,
            "https://teams.example/hook",
        )]))
        .unwrap();
        assert_eq!(config.port, 8090);
        assert_eq!(config.teams_webhook_url, "https://teams.example/hook");
        assert_eq!(config.forward_timeout, None);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:8090");
    }

    #[test]
    fn explicit_port_and_timeout_are_parsed() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            (TEAMS_WEBHOOK_URL_ENV, "https://teams.example/hook"),
            (PORT_ENV, "3000"),
            (FORWARD_TIMEOUT_ENV, "15"),
            (LOG_DIR_ENV, "/var/log/relay"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.forward_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/relay")));
    }

    #[test]
    fn non_integer_port_is_fatal() {
        let result = RelayConfig::from_lookup(lookup_from(&[
            (TEAMS_WEBHOOK_URL_ENV, "https://teams.example/hook"),
            (PORT_ENV, "eighty"),
        ]));
        match result {
            Err(RelayError::Config(msg)) => assert!(msg.contains("eighty")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_port_is_fatal() {
        let result = RelayConfig::from_lookup(lookup_from(&[
            (TEAMS_WEBHOOK_URL_ENV, "https://teams.example/hook"),
            (PORT_ENV, "70000"),
        ]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn invalid_timeout_is_fatal() {
        let result = RelayConfig::from_lookup(lookup_from(&[
            (TEAMS_WEBHOOK_URL_ENV, "https://teams.example/hook"),
            (FORWARD_TIMEOUT_ENV, "soon"),
        ]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }
}
