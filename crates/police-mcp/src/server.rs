//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling with the
//! upstream crime-data client.

use std::io::{BufRead, Write};

use serde_json::{Value, json};

use police_api::PoliceClient;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

/// MCP server for the UK Police crime-data API
///
/// Exposes the 21 crime-data tools over JSON-RPC 2.0 on stdio. Tool
/// failures ride inside the result envelope (`isError: true`); protocol
/// failures use JSON-RPC error responses.
///
/// # Example
///
/// ```ignore
/// use police_api::PoliceClient;
/// use police_mcp::PoliceMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = PoliceMcpServer::new(PoliceClient::new()?);
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct PoliceMcpServer {
    /// Client for the upstream service
    client: PoliceClient,

    /// Whether the server has been initialized
    initialized: bool,

    /// Available MCP tools, in declaration order
    tools: Vec<ToolDefinition>,
}

impl PoliceMcpServer {
    /// Create a new server instance around an upstream client
    pub fn new(client: PoliceClient) -> Self {
        Self {
            client,
            initialized: false,
            tools: Vec::new(),
        }
    }

    /// Load the tool catalog and mark the server ready
    pub fn initialize(&mut self) {
        tracing::info!(base_url = %self.client.base_url(), "Initializing MCP server");
        self.tools = get_tool_definitions();
        self.initialized = true;
    }

    /// Run the MCP server
    ///
    /// Processes MCP protocol messages over stdin/stdout until EOF.
    /// Logs go to stderr; stdout carries only protocol traffic.
    pub async fn run(&mut self) -> Result<()> {
        self.initialize();

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Parses the JSON-RPC request and dispatches to the appropriate
    /// handler. Returns the response as a string, or an empty string for
    /// notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" => return Ok(String::new()), // Notification, no response
            "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "police-uk-api-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list: the loaded catalog in declaration order
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools_value: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools_value }))
    }

    /// Handle tools/call: execute the tool and wrap the outcome
    ///
    /// Both branches are JSON-RPC successes; a failing tool is reported
    /// inside the envelope with `isError: true` and an `Error: ...` text.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(&self.client, &tool_params.name, tool_params.arguments).await {
            Ok(result) => {
                let tool_result = ToolResult::text(serde_json::to_string_pretty(&result)?);
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
            Err(e) => {
                let tool_result = ToolResult::error(format!("Error: {}", e));
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
        }
    }

    /// Check if the server is initialized
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get available tools
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
