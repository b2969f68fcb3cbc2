//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are declared as endpoint tables in `domains/tools/definitions/`,
//! grouped by GHL functional area, and aggregated by the `ToolRegistry`.
//! This handler only translates between MCP messages and registry calls:
//! `tools/list` maps to `ToolRegistry::list_all` and `tools/call` to
//! `ToolRegistry::dispatch`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::client::GhlClient;
use crate::domains::tools::{DispatchError, ErrorKind, ToolRegistry, build_registry};

/// Prefix of every error message returned for a failed tool call.
const FAILURE_PREFIX: &str = "Tool execution failed";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone: every transport and every session shares the same registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool group, built once at startup.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the shared GHL client and the production registry. Fails only
    /// if the client cannot be constructed or two groups claim one tool name.
    pub fn new(config: Config) -> Result<Self> {
        if !config.ghl.has_credentials() {
            warn!("No GHL API key configured; every tool call will fail until GHL_API_KEY is set");
        }

        let client = GhlClient::new(&config.ghl)?;
        let registry = build_registry(Arc::new(client))?;

        info!(
            "Registered {} tools across {} groups",
            registry.len(),
            registry.group_ids().len()
        );

        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already built registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Number of tools currently advertised.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    // ========================================================================
    // Transport-independent operations
    // ========================================================================

    /// List all available tools, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list_all()
    }

    /// Call a tool by name. Absent arguments are treated as an empty object.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Executing tool: {}", name);

        let value = self
            .registry
            .dispatch(name, arguments.unwrap_or_default())
            .await
            .map_err(to_mcp_error)?;

        to_call_tool_result(&value)
    }
}

/// Wrap a tool's JSON value as a single pretty-printed text content item.
pub fn to_call_tool_result(
    value: &serde_json::Value,
) -> std::result::Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("{}: {}", FAILURE_PREFIX, e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Map a classified dispatch failure onto a protocol error.
pub fn to_mcp_error(err: DispatchError) -> McpError {
    let code = match err.kind() {
        ErrorKind::InvalidRequest => ErrorCode::INVALID_REQUEST,
        ErrorKind::UnknownTool => ErrorCode::METHOD_NOT_FOUND,
        ErrorKind::UpstreamFailure | ErrorKind::InternalError => ErrorCode::INTERNAL_ERROR,
    };
    McpError::new(code, format!("{}: {}", FAILURE_PREFIX, err), None)
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GoHighLevel CRM tools: contacts, conversations, opportunities, calendars, \
                 locations, marketing, custom objects, store, products, invoices and payments. \
                 Tools act on the configured location unless a locationId is passed."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.invoke(&request.name, request.arguments).await
    }
}
