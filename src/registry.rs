use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Per-call options forwarded to the registry.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Correlation token for progress notifications emitted by the server
    /// while the call runs. Absent means no correlation was requested.
    pub progress_token: Option<String>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("capability server '{server}' is not configured")]
    NotConfigured { server: String },
    #[error("capability server '{server}' transport error: {message}")]
    Transport { server: String, message: String },
    #[error("capability server '{server}' returned error {code}: {message}")]
    Rpc {
        server: String,
        code: i64,
        message: String,
    },
    #[error("call to capability server '{server}' was cancelled")]
    Cancelled { server: String },
}

/// The capability registry that performs the actual remote call. The engine
/// treats the returned value as an opaque output payload and any error as
/// fatal to the current pass; no retries happen at this layer.
#[async_trait]
pub trait ToolRegistry: Send + Sync {
    async fn call(
        &self,
        server: &str,
        tool: &str,
        arguments: Option<Map<String, Value>>,
        opts: CallOptions,
    ) -> Result<Value, RegistryError>;
}
