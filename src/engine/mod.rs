mod errors;
mod invoke;
mod models;
mod pass;


use std::sync::Arc;

use crate::config::EngineConfig;
use crate::confirm::Confirmer;
use crate::registry::ToolRegistry;

pub use errors::ToolCallError;
pub use models::{
    CompletionInput, Response, ResponseItem, Run, SessionHandle, Target, ToolCallRequest,
    ToolCallResult, ToolOutcome,
};

/// Executes one sequential processing pass over a run's tool calls.
///
/// The engine owns no run state itself; the driver hands it a `&mut Run`
/// for the duration of a single pass and must serialize passes per run.
pub struct ToolCallEngine {
    registry: Arc<dyn ToolRegistry>,
    confirmations: Arc<dyn Confirmer>,
    config: EngineConfig,
}

impl ToolCallEngine {
    pub fn new(
        registry: Arc<dyn ToolRegistry>,
        confirmations: Arc<dyn Confirmer>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            confirmations,
            config,
        }
    }
}
