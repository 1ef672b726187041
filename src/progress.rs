use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::engine::{CompletionInput, Target, ToolCallRequest};

pub const TOOLCALL_OUTPUT_EVENT: &str = "toolcall/output";

/// One completion-configuration entry supplied by the driver. Entries may
/// contribute a progress channel, a progress-correlation token, or both.
#[derive(Clone, Default)]
pub struct CompletionOptions {
    pub progress: Option<mpsc::Sender<Vec<u8>>>,
    pub progress_token: Option<String>,
}

/// Invocation-lifecycle event published to progress observers.
#[derive(Serialize)]
pub struct ProgressEvent<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub target: &'a Target,
    #[serde(rename = "toolCall")]
    pub tool_call: &'a ToolCallRequest,
    pub output: &'a [CompletionInput],
}

/// Completion options flattened once before a pass begins: the first
/// non-empty progress token wins, every progress sender is retained.
pub(crate) struct ResolvedOptions {
    pub(crate) progress_token: Option<String>,
    sinks: Vec<mpsc::Sender<Vec<u8>>>,
}

impl ResolvedOptions {
    pub(crate) fn resolve(opts: &[CompletionOptions]) -> Self {
        let progress_token = opts
            .iter()
            .filter_map(|opt| opt.progress_token.as_deref())
            .find(|token| !token.is_empty())
            .map(str::to_string);
        let sinks = opts.iter().filter_map(|opt| opt.progress.clone()).collect();
        Self {
            progress_token,
            sinks,
        }
    }

    /// Best-effort publication of a completed call. Serialization failures
    /// and full or closed channels never surface to the caller; progress is
    /// diagnostic, not part of the pass's correctness contract.
    pub(crate) fn emit_tool_output(
        &self,
        target: &Target,
        tool_call: &ToolCallRequest,
        output: &[CompletionInput],
    ) {
        if self.sinks.is_empty() {
            return;
        }
        let event = ProgressEvent {
            kind: TOOLCALL_OUTPUT_EVENT,
            target,
            tool_call,
            output,
        };
        let Ok(payload) = serde_json::to_vec(&event) else {
            return;
        };
        for sink in &self.sinks {
            if let Err(err) = sink.try_send(payload.clone()) {
                debug!(tool = %tool_call.name, %err, "Dropped progress event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_entry(token: &str) -> CompletionOptions {
        CompletionOptions {
            progress: None,
            progress_token: Some(token.to_string()),
        }
    }

    #[test]
    fn first_non_empty_progress_token_wins() {
        let opts = vec![
            CompletionOptions::default(),
            token_entry(""),
            token_entry("tok-1"),
            token_entry("tok-2"),
        ];

        let resolved = ResolvedOptions::resolve(&opts);
        assert_eq!(resolved.progress_token.as_deref(), Some("tok-1"));
    }

    #[test]
    fn no_token_when_all_entries_are_empty() {
        let opts = vec![CompletionOptions::default(), token_entry("")];

        let resolved = ResolvedOptions::resolve(&opts);
        assert!(resolved.progress_token.is_none());
    }

    #[tokio::test]
    async fn emit_drops_event_when_channel_is_full() {
        let (sender, mut receiver) = mpsc::channel(1);
        sender.try_send(b"occupied".to_vec()).expect("fill channel");

        let opts = vec![CompletionOptions {
            progress: Some(sender),
            progress_token: None,
        }];
        let resolved = ResolvedOptions::resolve(&opts);

        let target = Target {
            server: "utilities".into(),
            target_name: "weather".into(),
        };
        let call = ToolCallRequest {
            call_id: "call-1".into(),
            name: "weather".into(),
            arguments: String::new(),
        };
        resolved.emit_tool_output(&target, &call, &[]);

        assert_eq!(receiver.recv().await.as_deref(), Some(&b"occupied"[..]));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn emit_survives_closed_channel() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);

        let opts = vec![CompletionOptions {
            progress: Some(sender),
            progress_token: None,
        }];
        let resolved = ResolvedOptions::resolve(&opts);

        let target = Target {
            server: "utilities".into(),
            target_name: "weather".into(),
        };
        let call = ToolCallRequest {
            call_id: "call-1".into(),
            name: "weather".into(),
            arguments: String::new(),
        };
        resolved.emit_tool_output(&target, &call, &[]);
    }
}
