use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::engine::{SessionHandle, Target, ToolCallRequest};

#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("confirmation backend error: {message}")]
    Backend { message: String },
    #[error("confirmation was cancelled")]
    Cancelled,
}

/// External approval step consulted before a tool call executes.
///
/// `Ok(None)` means the call proceeds unconfirmed. `Ok(Some(payload))`
/// replaces the real invocation outcome entirely; the registry is not
/// called and the returned payload becomes the tool's output.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(
        &self,
        session: &SessionHandle,
        target: &Target,
        request: &ToolCallRequest,
    ) -> Result<Option<Value>, ConfirmError>;
}
