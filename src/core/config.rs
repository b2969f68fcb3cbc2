//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file when present) on top of defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Default GHL API base URL.
pub const DEFAULT_GHL_BASE_URL: &str = "https://services.leadconnectorhq.com";

/// API version header value expected by the GHL v2 API.
pub const DEFAULT_GHL_API_VERSION: &str = "2021-07-28";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// GoHighLevel API access.
    pub ghl: GhlConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the GoHighLevel API client.
///
/// This is shared read-only by every tool group once the server is built.
#[derive(Clone, Serialize, Deserialize)]
pub struct GhlConfig {
    /// Private integration token or OAuth access token.
    pub api_key: Option<String>,

    /// API base URL.
    pub base_url: String,

    /// Value of the `Version` header.
    pub api_version: String,

    /// Default location (sub-account) for location-scoped calls.
    pub location_id: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for GhlConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhlConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("location_id", &self.location_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GhlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GHL_BASE_URL.to_string(),
            api_version: DEFAULT_GHL_API_VERSION.to_string(),
            location_id: None,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ghl-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            ghl: GhlConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix, API access uses `GHL_`.
    /// Missing credentials are reported but never abort startup: tool calls
    /// fail individually instead. Reads the process environment only; the
    /// binary loads `.env` before calling this.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.ghl = GhlConfig::from_env();

        config
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL`, defaulting to `info`.
    ///
    /// Separate from [`Config::from_env`] so logging can be initialized
    /// before the rest of the configuration reports problems.
    pub fn from_env() -> Self {
        Self {
            level: non_empty_var("MCP_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

impl GhlConfig {
    /// Load the GHL section from `GHL_*` environment variables.
    pub fn from_env() -> Self {
        let mut ghl = Self::default();

        match non_empty_var("GHL_API_KEY") {
            Some(key) => {
                ghl.api_key = Some(key);
                info!("GHL API key loaded from environment");
            }
            None => error!("GHL_API_KEY environment variable is required"),
        }

        match non_empty_var("GHL_LOCATION_ID") {
            Some(location) => ghl.location_id = Some(location),
            None => error!("GHL_LOCATION_ID environment variable is required"),
        }

        if let Some(base_url) = non_empty_var("GHL_BASE_URL") {
            ghl.base_url = base_url;
        }

        if let Some(version) = non_empty_var("GHL_API_VERSION") {
            ghl.api_version = version;
        }

        if let Some(timeout) = non_empty_var("GHL_TIMEOUT_SECS").and_then(|t| t.parse().ok()) {
            ghl.timeout_secs = timeout;
        }

        ghl
    }

    /// Whether an access token is present.
    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_ghl_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("GHL_API_KEY", "pit-test-123");
            std::env::set_var("GHL_LOCATION_ID", "loc_abc");
            std::env::set_var("GHL_BASE_URL", "https://ghl.example.test");
            std::env::set_var("GHL_TIMEOUT_SECS", "7");
        }
        let ghl = GhlConfig::from_env();
        assert_eq!(ghl.api_key.as_deref(), Some("pit-test-123"));
        assert_eq!(ghl.location_id.as_deref(), Some("loc_abc"));
        assert_eq!(ghl.base_url, "https://ghl.example.test");
        assert_eq!(ghl.timeout_secs, 7);
        assert!(ghl.has_credentials());
        unsafe {
            std::env::remove_var("GHL_API_KEY");
            std::env::remove_var("GHL_LOCATION_ID");
            std::env::remove_var("GHL_BASE_URL");
            std::env::remove_var("GHL_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_missing_credentials_do_not_panic() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("GHL_API_KEY");
            std::env::set_var("GHL_LOCATION_ID", "");
        }
        let ghl = GhlConfig::from_env();
        assert!(ghl.api_key.is_none());
        assert!(ghl.location_id.is_none());
        assert!(!ghl.has_credentials());
        assert_eq!(ghl.base_url, DEFAULT_GHL_BASE_URL);
        assert_eq!(ghl.api_version, DEFAULT_GHL_API_VERSION);
        unsafe {
            std::env::remove_var("GHL_LOCATION_ID");
        }
    }

    #[test]
    fn test_config_from_process_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "ghl-test");
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "ghl-test");
        assert_eq!(config.logging.level, "debug");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let ghl = GhlConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", ghl);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "ghl-mcp-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
