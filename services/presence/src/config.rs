//! Presence service configuration
//!
//! Settings are layered: built-in defaults, then an optional
//! `config/presence.toml`, then `PRESENCE_*` environment variables.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Service settings
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceConfig {
    /// Interface to bind the HTTP listener to
    pub host: String,
    /// Port to bind the HTTP listener to
    pub port: u16,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

impl PresenceConfig {
    /// Load the configuration from defaults, file and environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3002)?
            .set_default("log_level", "info")?
            .set_default("run_migrations", true)?
            .add_source(config::File::with_name("config/presence").required(false))
            .add_source(config::Environment::with_prefix("PRESENCE").try_parsing(true))
            .build()
            .context("Failed to build presence configuration")?;

        settings
            .try_deserialize()
            .context("Failed to deserialize presence configuration")
    }

    /// Socket address to listen on
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var("PRESENCE_HOST");
            std::env::remove_var("PRESENCE_PORT");
            std::env::remove_var("PRESENCE_LOG_LEVEL");
            std::env::remove_var("PRESENCE_RUN_MIGRATIONS");
        }
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();

        let config = PresenceConfig::load().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3002);
        assert_eq!(config.log_level, "info");
        assert!(config.run_migrations);
        assert_eq!(config.bind_addr().unwrap().port(), 3002);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        unsafe {
            std::env::set_var("PRESENCE_HOST", "127.0.0.1");
            std::env::set_var("PRESENCE_PORT", "4100");
            std::env::set_var("PRESENCE_LOG_LEVEL", "debug");
            std::env::set_var("PRESENCE_RUN_MIGRATIONS", "false");
        }

        let config = PresenceConfig::load().unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:4100");
        assert_eq!(config.log_level, "debug");
        assert!(!config.run_migrations);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_port() {
        clear_env();
        unsafe {
            std::env::set_var("PRESENCE_PORT", "not-a-port");
        }

        assert!(PresenceConfig::load().is_err());

        clear_env();
    }

    #[test]
    fn test_bind_addr_rejects_bad_host() {
        let config = PresenceConfig {
            host: "not a host".to_string(),
            port: 80,
            log_level: "info".to_string(),
            run_migrations: false,
        };
        assert!(config.bind_addr().is_err());
    }
}
