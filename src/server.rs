//! MCP server implementation for the platform version channel

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::version::{self, OsVersionSource, SystemVersionSource, CHANNEL_NAME};

/// The main Platform Version MCP Server
#[derive(Clone)]
pub struct PlatformVersionServer {
    source: Arc<dyn OsVersionSource>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Dispatch Errors
// ============================================================================

/// Errors produced by in-process dispatch
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Method name not present in the tool table
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Framework-level failure, propagated unchanged
    #[error("mcp error: {0}")]
    Mcp(String),
}

impl From<McpError> for DispatchError {
    fn from(err: McpError) -> Self {
        DispatchError::Mcp(err.message.to_string())
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl PlatformVersionServer {
    pub fn new() -> Self {
        Self::with_source(Arc::new(SystemVersionSource))
    }

    /// Build a server around an explicit version source.
    pub fn with_source(source: Arc<dyn OsVersionSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get the host operating system version as a '<platform> <version>' string"
    )]
    async fn get_platform_version(&self) -> Result<CallToolResult, McpError> {
        let response = version::platform_version_string(self.source.as_ref());
        tracing::debug!(%response, "answering version query");
        Ok(CallToolResult::success(vec![Content::text(response)]))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for PlatformVersionServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Platform Version MCP Server - reports the host operating system \
                 version as a '<platform> <version>' string."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for PlatformVersionServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// In-Process Dispatch
// ============================================================================

impl PlatformVersionServer {
    /// Name the channel is registered under.
    pub fn server_name(&self) -> &str {
        CHANNEL_NAME
    }

    /// List the method table.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Execute a method by name without going through a transport.
    ///
    /// Arguments are accepted for wire compatibility and ignored; unknown
    /// method names are rejected rather than answered.
    pub async fn call_tool(
        &self,
        name: &str,
        _args: Value,
    ) -> Result<CallToolResult, DispatchError> {
        match name {
            "get_platform_version" => self.get_platform_version().await.map_err(Into::into),

            _ => Err(DispatchError::UnsupportedOperation(name.to_string())),
        }
    }
}
