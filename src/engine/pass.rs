use tracing::{debug, info};

use super::models::{ResponseItem, Run, SessionHandle, ToolOutcome};
use super::{ToolCallEngine, ToolCallError};
use crate::progress::{CompletionOptions, ResolvedOptions};

impl ToolCallEngine {
    /// Process every tool call in the run's current response, in emission
    /// order. Calls whose identity is already marked done are skipped, so
    /// reprocessing a previously handled response performs no remote calls.
    ///
    /// Any error aborts the pass; outcomes recorded before the failure stay
    /// in `run.tool_outputs`, the failing call and everything after it are
    /// left unrecorded for a later pass to resume.
    pub async fn process(
        &self,
        run: &mut Run,
        session: Option<&SessionHandle>,
        opts: &[CompletionOptions],
    ) -> Result<(), ToolCallError> {
        let resolved = ResolvedOptions::resolve(opts);
        let mut saw_tool_call = false;

        for item in &run.response.items {
            let ResponseItem::ToolCall(call) = item else {
                continue;
            };
            saw_tool_call = true;

            if run
                .tool_outputs
                .get(&call.call_id)
                .is_some_and(|outcome| outcome.done)
            {
                debug!(call_id = %call.call_id, tool = %call.name, "Skipping completed call");
                continue;
            }

            let target = run
                .tool_targets
                .get(&call.name)
                .cloned()
                .ok_or_else(|| ToolCallError::UnresolvedTool {
                    tool: call.name.clone(),
                })?;

            let output = self.invoke(&target, call, session, &resolved).await?;
            resolved.emit_tool_output(&target, call, &output);

            info!(call_id = %call.call_id, tool = %call.name, server = %target.server, "Tool call completed");
            run.tool_outputs
                .insert(call.call_id.clone(), ToolOutcome { output, done: true });
        }

        if !saw_tool_call {
            // A response without tool calls is a plain final answer.
            debug!("Response carried no tool calls; marking run done");
            run.done = true;
        }

        Ok(())
    }
}
