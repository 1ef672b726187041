use thiserror::Error;

use crate::confirm::ConfirmError;
use crate::registry::RegistryError;

/// Fatal errors for a processing pass. Any of these aborts the pass
/// immediately; outcomes recorded for earlier calls in the same pass
/// are preserved, so a later pass can resume without repeating them.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("no configured target for tool '{tool}'")]
    UnresolvedTool { tool: String },
    #[error("failed to confirm call to tool '{tool}': {source}")]
    ConfirmationFailed {
        tool: String,
        #[source]
        source: ConfirmError,
    },
    #[error("malformed arguments for tool '{tool}': {source}")]
    ArgumentDecode {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to invoke tool '{tool}' on server '{server}': {source}")]
    Invocation {
        tool: String,
        server: String,
        #[source]
        source: RegistryError,
    },
}
