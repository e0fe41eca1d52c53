//! HTTP client initialization.
//!
//! This module provides functions to initialize the two HTTP clients the race
//! uses: one for the DNS control plane and one for the victim service.

use std::time::Duration;

use crate::config::Config;
use reqwest::ClientBuilder;

/// Applies the options shared by both clients.
///
/// No timeout is set unless `--timeout-seconds` was given, so every call is
/// bounded only by the transport defaults.
fn base_builder(config: &Config) -> ClientBuilder {
    let builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    match config.timeout_seconds {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    }
}

/// Initializes the HTTP client for the DNS control plane API.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_dns_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    base_builder(config).build()
}

/// Initializes the HTTP client for the victim service.
///
/// Creates a `reqwest::Client` with a cookie store enabled: the victim's login
/// response sets cookies that must accompany the session query parameter on
/// every later request.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_victim_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    base_builder(config).cookie_store(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_clients_with_defaults() {
        let config = Config::default();
        assert!(init_dns_client(&config).is_ok());
        assert!(init_victim_client(&config).is_ok());
    }

    #[test]
    fn test_init_clients_with_timeout() {
        let config = Config {
            timeout_seconds: Some(3),
            ..Default::default()
        };
        assert!(init_dns_client(&config).is_ok());
        assert!(init_victim_client(&config).is_ok());
    }
}
