//! JSON command API: one request in, one response envelope out.
//!
//! Requests are `{"action": ..., "payload": ...}`; responses are
//! `{"status":"ok","data":...}` or
//! `{"status":"error","error":{"code","message"}}`. Errors stay in-band;
//! the process exits zero either way so callers only parse stdout.

use annotator_core::{classify, line_comment, AnnotationTarget, Annotator};
use anyhow::{Context as AnyhowContext, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
enum CommandRequest {
    /// Compute an insertion plan for a caret or selection target
    Annotate(AnnotatePayload),

    /// Classify a single line of text
    Classify(ClassifyPayload),
}

#[derive(Debug, Default, Deserialize)]
struct AnnotatePayload {
    #[serde(default)]
    caret: Option<CaretPayload>,

    #[serde(default)]
    selection: Option<SelectionPayload>,
}

#[derive(Debug, Deserialize)]
struct CaretPayload {
    line: usize,

    #[serde(default = "default_column")]
    column: usize,

    line_text: String,
}

#[derive(Debug, Deserialize)]
struct SelectionPayload {
    start_line: usize,

    #[serde(default = "default_column")]
    start_column: usize,

    text: String,
}

#[derive(Debug, Deserialize)]
struct ClassifyPayload {
    text: String,
}

fn default_column() -> usize {
    1
}

pub(crate) fn run(inline: Option<&str>) -> Result<()> {
    let raw = match inline {
        Some(raw) => raw.to_string(),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("cannot read request from stdin")?;
            input
        }
    };

    let response = match serde_json::from_str::<CommandRequest>(&raw) {
        Ok(request) => execute(request),
        Err(err) => error("invalid_request", format!("invalid JSON request: {err}")),
    };
    crate::print_stdout(&serde_json::to_string(&response)?)
}

fn execute(request: CommandRequest) -> Value {
    match request {
        CommandRequest::Annotate(payload) => {
            let target = match (payload.caret, payload.selection) {
                (Some(caret), _) => Some(AnnotationTarget::Caret {
                    line: caret.line,
                    column: caret.column,
                    line_text: caret.line_text,
                }),
                (None, Some(selection)) => Some(AnnotationTarget::Selection {
                    start_line: selection.start_line,
                    start_column: selection.start_column,
                    text: selection.text,
                }),
                (None, None) => None,
            };
            match target {
                Some(target) => {
                    let plan = Annotator::new().plan_for(&target);
                    ok(json!({ "plan": plan }))
                }
                // No active target is a silent no-op, not an error.
                None => {
                    log::debug!("annotate request without a target");
                    ok(json!({ "plan": null }))
                }
            }
        }
        CommandRequest::Classify(payload) => {
            let line = payload.text.split('\n').next().unwrap_or_default();
            let classification = classify(line);
            let comment = line_comment(&classification);
            ok(json!({ "classification": classification, "comment": comment }))
        }
    }
}

fn ok(data: Value) -> Value {
    json!({ "status": "ok", "data": data })
}

fn error(code: &str, message: String) -> Value {
    json!({ "status": "error", "error": { "code": code, "message": message } })
}
