use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::models::{CompletionInput, SessionHandle, Target, ToolCallRequest, ToolCallResult};
use super::{ToolCallEngine, ToolCallError};
use crate::confirm::ConfirmError;
use crate::progress::ResolvedOptions;
use crate::registry::CallOptions;

impl ToolCallEngine {
    /// Perform one tool call and wrap its result as completion input.
    /// Argument decoding happens before the confirmation gate, and a
    /// substitute result from the gate replaces the registry call entirely.
    pub(super) async fn invoke(
        &self,
        target: &Target,
        call: &ToolCallRequest,
        session: Option<&SessionHandle>,
        resolved: &ResolvedOptions,
    ) -> Result<Vec<CompletionInput>, ToolCallError> {
        let arguments = decode_arguments(call)?;

        let substitute =
            self.confirm(target, call, session)
                .await
                .map_err(|source| ToolCallError::ConfirmationFailed {
                    tool: call.name.clone(),
                    source,
                })?;

        let output = match substitute {
            Some(output) => {
                info!(tool = %call.name, server = %target.server, "Tool call substituted by confirmation");
                output
            }
            None => {
                debug!(tool = %call.name, server = %target.server, "Dispatching tool call");
                self.registry
                    .call(
                        &target.server,
                        &target.target_name,
                        arguments,
                        CallOptions {
                            progress_token: resolved.progress_token.clone(),
                        },
                    )
                    .await
                    .map_err(|source| {
                        warn!(tool = %call.name, server = %target.server, %source, "Tool invocation failed");
                        ToolCallError::Invocation {
                            tool: call.name.clone(),
                            server: target.server.clone(),
                            source,
                        }
                    })?
            }
        };

        let output_role = self
            .config
            .flows
            .get(&target.server)
            .and_then(|flow| flow.output_role.clone());

        Ok(vec![CompletionInput {
            tool_result: ToolCallResult {
                call_id: call.call_id.clone(),
                output,
                output_role,
            },
        }])
    }

    async fn confirm(
        &self,
        target: &Target,
        call: &ToolCallRequest,
        session: Option<&SessionHandle>,
    ) -> Result<Option<Value>, ConfirmError> {
        // Calls to configured peer agents and flows are trusted by
        // construction and never go through confirmation.
        if self.config.agents.contains_key(&target.server) {
            return Ok(None);
        }
        if self.config.flows.contains_key(&target.server) {
            return Ok(None);
        }
        // No session means background execution: there is no confirmation
        // authority to consult, so the call proceeds.
        let Some(session) = session else {
            return Ok(None);
        };
        self.confirmations.confirm(session, target, call).await
    }
}

fn decode_arguments(call: &ToolCallRequest) -> Result<Option<Map<String, Value>>, ToolCallError> {
    if call.arguments.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&call.arguments)
        .map(Some)
        .map_err(|source| ToolCallError::ArgumentDecode {
            tool: call.name.clone(),
            source,
        })
}
