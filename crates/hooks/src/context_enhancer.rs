#![forbid(unsafe_code)]

//! UserPromptSubmit context enhancer: tells the agent which project metadata exists
//! under the working directory.

use pace_core::{HookError, HookResult, Request, Response};
use serde_json::json;
use std::path::Path;

pub const HOOK_EVENT_NAME: &str = "UserPromptSubmit";
pub const PROJECT_DOC_DIR: &str = ".claude/project_document";

const CONTEXT_HEADER: &str = "\n\n📋 项目上下文:\n";

/// Relative path → note shown to the agent when that path exists. Order is output order.
pub const CONTEXT_PROBES: &[(&str, &str)] = &[(PROJECT_DOC_DIR, "📁 项目文档目录存在")];

pub fn project_context(root: &Path) -> Vec<&'static str> {
    CONTEXT_PROBES
        .iter()
        .filter(|(rel, _)| root.join(rel).exists())
        .map(|(_, note)| *note)
        .collect()
}

pub fn enhance_in(root: &Path) -> Option<Response> {
    let notes = project_context(root);
    if notes.is_empty() {
        return None;
    }
    let additional_context = format!("{CONTEXT_HEADER}{}", notes.join("\n"));
    Some(Response::new().with(
        "hookSpecificOutput",
        json!({
            "hookEventName": HOOK_EVENT_NAME,
            "additionalContext": additional_context,
        }),
    ))
}

pub fn handle(_request: &Request) -> HookResult<Option<Response>> {
    let cwd = std::env::current_dir().map_err(HookError::WorkingDir)?;
    let response = enhance_in(&cwd);
    tracing::debug!(cwd = %cwd.display(), found = response.is_some(), "context_enhancer.probe");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(prefix: &str) -> PathBuf {
        let base = std::env::temp_dir();
        let pid = std::process::id();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = base.join(format!("{prefix}_{pid}_{nonce}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn no_metadata_means_no_response() {
        let root = temp_dir("pace_ctx_empty");
        assert!(project_context(&root).is_empty());
        assert!(enhance_in(&root).is_none());
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn project_doc_dir_is_reported_in_envelope() {
        let root = temp_dir("pace_ctx_doc");
        std::fs::create_dir_all(root.join(PROJECT_DOC_DIR)).expect("create doc dir");

        let response = enhance_in(&root).expect("response");
        assert_eq!(
            response.into_value(),
            json!({
                "hookSpecificOutput": {
                    "hookEventName": "UserPromptSubmit",
                    "additionalContext": "\n\n📋 项目上下文:\n📁 项目文档目录存在"
                }
            })
        );
        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn parent_claude_dir_alone_is_not_enough() {
        let root = temp_dir("pace_ctx_claude_only");
        std::fs::create_dir_all(root.join(".claude")).expect("create .claude");
        assert!(enhance_in(&root).is_none());
        let _ = std::fs::remove_dir_all(&root);
    }
}
