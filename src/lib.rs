//! Platform Version MCP Library
//!
//! Reports the host operating system version via a single MCP tool,
//! `get_platform_version`, which answers with `"<platform> <version>"`.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use platform_version_mcp::PlatformVersionServer;
//!
//! let server = PlatformVersionServer::new();
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `platform-version-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "platform_version": { "command": "./platform-version-mcp" } } }
//! ```

pub mod server;
pub mod version;

// Re-export main server type
pub use server::{DispatchError, PlatformVersionServer};

// Re-export the version seam for embedding and tests
pub use version::{
    platform_version_string, OsVersionSource, SystemVersionSource, CHANNEL_NAME, PLATFORM_LABEL,
};
