#![forbid(unsafe_code)]

//! P.A.C.E. hooks for the agent host.
//!
//! Each hook is a one-shot process: read one request on stdin, answer with at most one
//! JSON object on stdout, exit `0`. Any failure becomes a single diagnostic line on
//! stderr and exit `1`; nothing is written to stdout in that case.

pub mod context_enhancer;
pub mod logging;
pub mod path_router;
pub mod quality_gate;
pub mod task_tracker;

use pace_core::{HookError, HookResult, Request, Response, encode_response, read_request};
use std::io::{Read, Write};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HookKind {
    ContextEnhancer,
    PathRouter,
    QualityGate,
    TaskTracker,
}

impl HookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::ContextEnhancer => "context_enhancer",
            HookKind::PathRouter => "path_router",
            HookKind::QualityGate => "quality_gate",
            HookKind::TaskTracker => "task_tracker",
        }
    }

    /// Prefix of the stderr diagnostic; the host surfaces it to the user as-is.
    pub fn error_label(self) -> &'static str {
        match self {
            HookKind::ContextEnhancer => "上下文增强错误",
            HookKind::PathRouter => "P.A.C.E. 路由错误",
            HookKind::QualityGate => "质量检查错误",
            HookKind::TaskTracker => "任务追踪错误",
        }
    }

    pub fn handle(self, request: &Request) -> HookResult<Option<Response>> {
        match self {
            HookKind::ContextEnhancer => context_enhancer::handle(request),
            HookKind::PathRouter => Ok(Some(path_router::handle(request))),
            HookKind::QualityGate => Ok(Some(quality_gate::handle(request))),
            HookKind::TaskTracker => Ok(Some(task_tracker::handle(request))),
        }
    }
}

/// Runs one invocation against arbitrary streams.
///
/// The response is fully encoded before the first byte reaches `output`.
pub fn serve(kind: HookKind, input: impl Read, output: &mut impl Write) -> HookResult<()> {
    let request = read_request(input)?;
    tracing::debug!(hook = kind.as_str(), request = %request.as_value(), "hook.request");

    let Some(response) = kind.handle(&request)? else {
        tracing::debug!(hook = kind.as_str(), "hook.response.empty");
        return Ok(());
    };

    let text = encode_response(&response)?;
    tracing::debug!(hook = kind.as_str(), response = %text, "hook.response");
    writeln!(output, "{text}").map_err(HookError::WriteOutput)?;
    output.flush().map_err(HookError::WriteOutput)
}

/// Process entry point shared by every hook binary.
pub fn run_hook(kind: HookKind) -> ExitCode {
    logging::init();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    match serve(kind, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(hook = kind.as_str(), kind = err.kind(), "hook.failed");
            report_failure(kind, &err, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Writes the one-line diagnostic. A closed or broken stderr is ignored so the exit code
/// stays `1`.
pub fn report_failure(kind: HookKind, err: &HookError, errout: &mut impl Write) {
    let _ = writeln!(errout, "{}", err.diagnostic(kind.error_label()));
    let _ = errout.flush();
}
