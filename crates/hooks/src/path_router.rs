#![forbid(unsafe_code)]

use pace_core::{Request, Response};

pub const DEFAULT_PATH: &str = "Path_B";
pub const REASONING: &str = "基于任务复杂度分析";

/// Maps a task description to a P.A.C.E. execution path.
///
/// No complexity model exists yet, so every task lands on [`DEFAULT_PATH`].
pub fn analyze_complexity(_task: &str) -> &'static str {
    DEFAULT_PATH
}

pub fn handle(request: &Request) -> Response {
    let task = request.str_field("task");
    let path = analyze_complexity(task);
    tracing::debug!(task_chars = task.chars().count(), path, "path_router.route");
    Response::new()
        .with("selected_path", path)
        .with("reasoning", REASONING)
}
