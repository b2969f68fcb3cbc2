//! Tool-specific error types.
//!
//! Three layers meet here: [`ToolError`] is what a tool group reports,
//! [`RegistryError`] is a startup defect in the group table, and
//! [`DispatchError`] is the classified outcome a caller receives.

use serde::Serialize;
use thiserror::Error;

use crate::client::ApiError;

/// Marker in a failure message meaning the upstream resource does not exist.
pub const NOT_FOUND_MARKER: &str = "404";

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The group was asked to run a tool it does not handle.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The tool timed out during execution.
    #[error("Tool execution timed out: {0}")]
    Timeout(String),

    /// The upstream API could not serve the call, for reasons other than a
    /// missing resource.
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}

impl From<ApiError> for ToolError {
    fn from(err: ApiError) -> Self {
        // Only a 404 answer may carry the not-found marker forward.
        if err.is_not_found() {
            return Self::ExecutionFailed(err.to_string());
        }
        match err {
            ApiError::Timeout(_) => Self::Timeout(err.to_string()),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Startup-time defects in the set of registered groups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two groups advertise the same tool name.
    #[error("Duplicate tool name '{name}': already registered by '{existing_group}', also claimed by '{new_group}'")]
    DuplicateTool {
        name: String,
        existing_group: String,
        new_group: String,
    },

    /// A group advertises a tool its own membership check rejects.
    #[error("Group '{group}' advertises '{name}' but does not claim it")]
    MembershipMismatch { group: String, name: String },
}

/// Classification of a failed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    UnknownTool,
    InvalidRequest,
    UpstreamFailure,
    InternalError,
}

/// A classified dispatch failure, carrying the original message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    Internal(String),
}

impl DispatchError {
    /// The error kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownTool(_) => ErrorKind::UnknownTool,
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::UpstreamFailure(_) => ErrorKind::UpstreamFailure,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Classify a failure reported by a tool group.
    ///
    /// Rejected arguments and upstream "not found" answers are the caller's
    /// to fix; every other execution failure is upstream. A group disowning a
    /// tool it advertised is a routing defect.
    pub fn from_tool_error(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(_) => Self::InvalidRequest(err.to_string()),
            ToolError::NotFound(_) => Self::Internal(err.to_string()),
            ToolError::Timeout(_) | ToolError::Unavailable(_) => {
                Self::UpstreamFailure(err.to_string())
            }
            ToolError::ExecutionFailed(_) => {
                let message = err.to_string();
                if message.contains(NOT_FOUND_MARKER) {
                    Self::InvalidRequest(message)
                } else {
                    Self::UpstreamFailure(message)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_marker_classifies_as_invalid_request() {
        let err = DispatchError::from_tool_error(ToolError::execution_failed(
            "request failed: 404 not found",
        ));
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("request failed: 404 not found"));
    }

    #[test]
    fn test_failure_without_marker_is_upstream() {
        let err = DispatchError::from_tool_error(ToolError::execution_failed("connection reset"));
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_invalid_arguments_are_invalid_request() {
        let err = DispatchError::from_tool_error(ToolError::invalid_arguments("missing 'contactId'"));
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_timeout_is_upstream() {
        let err = DispatchError::from_tool_error(ToolError::Timeout("after 30s".to_string()));
        assert_eq!(err.kind(), ErrorKind::UpstreamFailure);
    }

    #[test]
    fn test_disowned_tool_is_internal() {
        let err = DispatchError::from_tool_error(ToolError::not_found("get_contact"));
        assert_eq!(err.kind(), ErrorKind::InternalError);
    }

    #[test]
    fn test_api_errors_convert() {
        let err: ToolError = ApiError::status(404, "Contact not found").into();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
        assert_eq!(
            DispatchError::from_tool_error(err).kind(),
            ErrorKind::InvalidRequest
        );

        let err: ToolError = ApiError::Timeout("deadline".to_string()).into();
        assert!(matches!(err, ToolError::Timeout(_)));

        let err: ToolError = ApiError::MissingCredentials.into();
        assert_eq!(
            DispatchError::from_tool_error(err).kind(),
            ErrorKind::UpstreamFailure
        );
    }

    #[test]
    fn test_marker_outside_not_found_status_is_upstream() {
        let cases = [
            ApiError::Transport(
                "error sending request for url (http://127.0.0.1:1/contacts/Ab404xYz)".to_string(),
            ),
            ApiError::Timeout("GET /contacts/Ab404xYz".to_string()),
            ApiError::status(500, "contact Ab404xYz could not be loaded"),
        ];
        for api_err in cases {
            let err = DispatchError::from_tool_error(api_err.into());
            assert_eq!(err.kind(), ErrorKind::UpstreamFailure, "{}", err);
        }
    }
}
