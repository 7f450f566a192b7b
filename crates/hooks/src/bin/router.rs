#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    pace_hooks::run_hook(pace_hooks::HookKind::PathRouter)
}
