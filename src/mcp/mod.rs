//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the translation cache to AI agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific parameter and result types

mod server;
pub mod types;

pub use server::{TrcacheMcpServer, run_server};
