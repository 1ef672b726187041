use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Mutable state of one conversational turn. Created by the turn-loop
/// driver, handed to the engine by reference for one pass at a time.
#[derive(Debug, Default)]
pub struct Run {
    pub response: Response,
    /// Tool name to resolved target, built earlier in the turn.
    pub tool_targets: HashMap<String, Target>,
    /// Call identity to outcome. Entries are write-once: a call marked
    /// done is never reprocessed within this run.
    pub tool_outputs: HashMap<String, ToolOutcome>,
    pub done: bool,
}

impl Run {
    pub fn new(response: Response, tool_targets: HashMap<String, Target>) -> Self {
        Self {
            response,
            tool_targets,
            tool_outputs: HashMap::new(),
            done: false,
        }
    }
}

/// The model's latest response, in emission order.
#[derive(Debug, Default)]
pub struct Response {
    pub items: Vec<ResponseItem>,
}

#[derive(Debug)]
pub enum ResponseItem {
    Text(String),
    ToolCall(ToolCallRequest),
}

/// One tool invocation requested by the model. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRequest {
    /// Opaque identity, unique within the response.
    pub call_id: String,
    pub name: String,
    /// Serialized JSON object; empty means the tool takes no arguments.
    pub arguments: String,
}

/// Resolved destination for a tool call: which capability server, and the
/// tool's name within that server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub server: String,
    pub target_name: String,
}

/// Write-once record of a processed call.
#[derive(Debug, Clone, Serialize)]
pub struct ToolOutcome {
    pub output: Vec<CompletionInput>,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub call_id: String,
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_role: Option<String>,
}

/// Unit fed back into the completion pipeline as the next turn's input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInput {
    pub tool_result: ToolCallResult,
}

/// Handle to the interactive session requesting this turn, supplied
/// explicitly by the driver. Absent for background execution.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: String,
}
