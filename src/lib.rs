//! GoHighLevel MCP Server Library
//!
//! This crate exposes the GoHighLevel (GHL) REST API to MCP clients as a
//! flat catalogue of tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **client**: Authenticated HTTP client for the GHL API
//! - **core**: Configuration, error handling, the MCP handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool groups, the registry and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use ghl_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
