//! Tool-call resolution and execution engine for a conversational agent
//! runtime. Given the model response held by a [`Run`], the engine resolves
//! each requested tool call to a capability server, gates it behind an
//! external confirmation step, invokes it through a [`ToolRegistry`], and
//! records the outcome keyed by call identity.

mod config;
mod confirm;
mod engine;
mod progress;
mod registry;

pub use config::{AgentConfig, ConfigError, EngineConfig, FlowConfig};
pub use confirm::{ConfirmError, Confirmer};
pub use engine::{
    CompletionInput, Response, ResponseItem, Run, SessionHandle, Target, ToolCallEngine,
    ToolCallError, ToolCallRequest, ToolCallResult, ToolOutcome,
};
pub use progress::{CompletionOptions, ProgressEvent, TOOLCALL_OUTPUT_EVENT};
pub use registry::{CallOptions, RegistryError, ToolRegistry};
