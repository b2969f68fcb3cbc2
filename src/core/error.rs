//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for everything that can stop
//! the server from starting or serving. Per-call failures never reach it:
//! they are classified by the registry and returned to the client.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The tool registry could not be built (duplicate tool names).
    #[error("Registry error: {0}")]
    Registry(#[from] crate::domains::tools::RegistryError),

    /// The GHL API client could not be constructed.
    #[error("API client error: {0}")]
    Api(#[from] crate::client::ApiError),

    /// Transport bind or serve failure.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::RegistryError;

    #[test]
    fn test_registry_defect_names_both_groups() {
        let err: Error = RegistryError::DuplicateTool {
            name: "send_sms".to_string(),
            existing_group: "contacts".to_string(),
            new_group: "conversations".to_string(),
        }
        .into();

        let message = err.to_string();
        assert!(message.starts_with("Registry error"));
        assert!(message.contains("contacts"));
        assert!(message.contains("conversations"));
    }
}
