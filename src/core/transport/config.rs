//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport for local MCP clients.
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP front door: health, tool listing and the streaming MCP endpoint.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the streaming MCP endpoint.
    #[serde(default = "default_mcp_path")]
    pub mcp_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_mcp_path() -> String {
    "/sse".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            mcp_path: default_mcp_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load transport config through an arbitrary variable lookup.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let transport = var("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            _ => {
                // Hosting platforms usually hand out the port through PORT.
                let port = var("MCP_HTTP_PORT")
                    .or_else(|| var("PORT"))
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_HTTP_PORT);
                let host = var("MCP_HTTP_HOST").unwrap_or_else(default_host);
                let mcp_path = var("MCP_HTTP_PATH")
                    .filter(|p| p.starts_with('/') && p.len() > 1)
                    .unwrap_or_else(default_mcp_path);
                let enable_cors = var("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true);
                Self::Http(HttpConfig {
                    port,
                    host,
                    mcp_path,
                    enable_cors,
                })
            }
            #[cfg(all(not(feature = "http"), feature = "stdio"))]
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{} (MCP at {})", cfg.host, cfg.port, cfg.mcp_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(all(test, feature = "http", feature = "stdio"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> TransportConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TransportConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn http(config: TransportConfig) -> HttpConfig {
        match config {
            TransportConfig::Http(cfg) => cfg,
            other => panic!("expected HTTP transport, got {:?}", other),
        }
    }

    #[test]
    fn test_http_is_the_default() {
        let cfg = http(load(&[]));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.mcp_path, "/sse");
        assert!(cfg.enable_cors);
    }

    #[test]
    fn test_stdio_selected_explicitly() {
        assert!(load(&[("MCP_TRANSPORT", "STDIO")]).is_stdio());
    }

    #[test]
    fn test_port_falls_back_to_platform_port() {
        assert_eq!(http(load(&[("PORT", "3000")])).port, 3000);
        assert_eq!(
            http(load(&[("PORT", "3000"), ("MCP_HTTP_PORT", "9000")])).port,
            9000
        );
        assert_eq!(http(load(&[("MCP_HTTP_PORT", "not-a-port")])).port, 8080);
    }

    #[test]
    fn test_http_overrides() {
        let cfg = http(load(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_HOST", "0.0.0.0"),
            ("MCP_HTTP_PATH", "/mcp"),
            ("MCP_HTTP_CORS", "false"),
        ]));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.mcp_path, "/mcp");
        assert!(!cfg.enable_cors);
    }

    #[test]
    fn test_invalid_mcp_path_is_ignored() {
        assert_eq!(http(load(&[("MCP_HTTP_PATH", "sse")])).mcp_path, "/sse");
        assert_eq!(http(load(&[("MCP_HTTP_PATH", "/")])).mcp_path, "/sse");
    }
}
