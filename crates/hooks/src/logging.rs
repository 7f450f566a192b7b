#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

/// Filter directives in `RUST_LOG` syntax. Unset means silent: stderr belongs to the
/// one-line diagnostic the host reads on failure.
pub const LOG_ENV: &str = "PACE_HOOKS_LOG";

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("off"))
}

/// Best-effort; a subscriber that is already installed wins.
pub fn init() {
    let filter = filter_from(env_var(LOG_ENV).as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn missing_or_invalid_directives_turn_logging_off() {
        assert_eq!(filter_from(None).max_level_hint(), Some(LevelFilter::OFF));
        assert_eq!(
            filter_from(Some("pace_hooks=verbose")).max_level_hint(),
            Some(LevelFilter::OFF)
        );
    }

    #[test]
    fn valid_directives_are_kept() {
        let filter = filter_from(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
