//! Model Context Protocol (MCP) server implementation.
//!
//! This module exposes the note, calculation and time tools to AI
//! assistants over stdio transport using JSON-RPC 2.0 messages.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        MCP Server                          │
//! │                                                            │
//! │  ┌───────────┐   ┌────────────┐   ┌────────────────────┐  │
//! │  │ Transport │──▶│   Server   │──▶│     Dispatcher     │  │
//! │  │  (stdio)  │   │ (lifecycle)│   │ (registry+handlers)│  │
//! │  └───────────┘   └────────────┘   └────────────────────┘  │
//! │        │               │                    │              │
//! │        ▼               ▼                    ▼              │
//! │  ┌──────────────────────────────────────────────────┐     │
//! │  │               JSON-RPC Messages                  │     │
//! │  └──────────────────────────────────────────────────┘     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod dispatch;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod transport;

pub use dispatch::{Dispatcher, ToolCallResult, ToolContent};
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use registry::{ParamKind, ParamSpec, ToolDefinition, ToolRegistry};
pub use server::McpServer;
pub use transport::StdioTransport;
