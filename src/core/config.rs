//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Publish the raw prompt texts as resources.
    pub expose_assets: bool,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Register the first prompt revision next to the current one.
    pub include_v1: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            expose_assets: true,
        }
    }
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self { include_v1: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "sas-prompt-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

/// Parse a boolean flag from an environment variable.
pub(crate) fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!(
            "{} must be a boolean, got '{}'",
            var, other
        ))),
    }
}

/// Parse a numeric environment variable.
pub(crate) fn parse_number<T: std::str::FromStr>(var: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("{} must be a number, got '{}'", var, value)))
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(value) = std::env::var("MCP_PROMPTS_INCLUDE_V1") {
            config.prompts.include_v1 = parse_flag("MCP_PROMPTS_INCLUDE_V1", &value)?;
        }

        if let Ok(value) = std::env::var("MCP_RESOURCES_EXPOSE_ASSETS") {
            config.resources.expose_assets = parse_flag("MCP_RESOURCES_EXPOSE_ASSETS", &value)?;
        }

        config.transport = TransportConfig::from_env()?;

        Ok(config)
    }

    /// One-line description of the effective settings, for the startup log.
    pub fn summary(&self) -> String {
        format!(
            "prompt v1 {}, prompt text resources {}, transport {}",
            if self.prompts.include_v1 { "registered" } else { "skipped" },
            if self.resources.expose_assets { "exposed" } else { "hidden" },
            self.transport.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "sas-prompt-server");
        assert!(config.prompts.include_v1);
        assert!(config.resources.expose_assets);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_prompt_flags_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PROMPTS_INCLUDE_V1", "false");
            std::env::set_var("MCP_RESOURCES_EXPOSE_ASSETS", "0");
        }
        let config = Config::from_env().unwrap();
        assert!(!config.prompts.include_v1);
        assert!(!config.resources.expose_assets);
        unsafe {
            std::env::remove_var("MCP_PROMPTS_INCLUDE_V1");
            std::env::remove_var("MCP_RESOURCES_EXPOSE_ASSETS");
        }
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PROMPTS_INCLUDE_V1", "maybe");
        }
        let result = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_PROMPTS_INCLUDE_V1");
        }
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "sas-prompts-test");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.name, "sas-prompts-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_summary_reflects_flags() {
        let mut config = Config::default();
        config.prompts.include_v1 = false;
        let summary = config.summary();
        assert!(summary.contains("prompt v1 skipped"));
        assert!(summary.contains("prompt text resources exposed"));
        assert!(summary.contains(&config.transport.description()));
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_max_connections_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "tcp");
            std::env::set_var("MCP_TCP_MAX_CONNECTIONS", "8");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_TCP_MAX_CONNECTIONS");
        }
        match config.unwrap().transport {
            TransportConfig::Tcp(tcp) => assert_eq!(tcp.max_connections, 8),
            #[allow(unreachable_patterns)]
            _ => panic!("Expected TCP transport"),
        }
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_invalid_tcp_max_connections_is_rejected() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        for value in ["many", "0", "-3"] {
            unsafe {
                std::env::set_var("MCP_TRANSPORT", "tcp");
                std::env::set_var("MCP_TCP_MAX_CONNECTIONS", value);
            }
            let result = Config::from_env();
            unsafe {
                std::env::remove_var("MCP_TRANSPORT");
                std::env::remove_var("MCP_TCP_MAX_CONNECTIONS");
            }
            assert!(matches!(result, Err(Error::Config(_))), "{}", value);
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u16>("X", " 8080 ").unwrap(), 8080);
        assert!(parse_number::<u16>("X", "70000").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "YES").unwrap());
        assert!(!parse_flag("X", " off ").unwrap());
        assert!(parse_flag("X", "").is_err());
    }
}
