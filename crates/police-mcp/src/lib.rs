//! MCP Server for the UK Police crime-data API
//!
//! This crate exposes the `data.police.uk` public API via the Model
//! Context Protocol (MCP), letting agentic clients (like Claude Desktop,
//! Windsurf, Cursor) query street-level crimes, outcomes, forces,
//! neighbourhoods, and stop-and-search records as callable tools.
//!
//! # Architecture
//!
//! The `police-mcp` crate acts as a facade layer over the `police-api`
//! client:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ police-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ police-api (HTTP Client) ]
//!        |
//!        +--> https://data.police.uk/api
//! ```
//!
//! # Tools
//!
//! The server exposes 21 tools, one per upstream endpoint:
//! - Crimes (street-level, at-location, no-location, categories, outcomes)
//! - Forces (list, details, senior officers)
//! - Neighbourhoods (list, details, boundary, team, events, priorities, locate)
//! - Stop and search (by area, by location, no location, by force)
//!
//! Tool-level failures never escape as protocol errors: an unknown tool
//! or bad argument bag is reported inside the result envelope with
//! `isError: true`, and upstream faults degrade to empty results.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::PoliceMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
