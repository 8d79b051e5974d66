use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `RUST_LOG`, `LOG_LEVEL` nor `-v` say otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Crates whose logs are always capped at `warn`.
const NOISY_DEPENDENCIES: [&str; 5] = ["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Maps the number of `-v` flags to a level. `0` means "use the default".
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn filter_directives(level: &str) -> String {
    let mut directives = ["linguaboard", "linguaboard_client", "linguaboard_core"]
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>();
    directives.extend(NOISY_DEPENDENCIES.iter().map(|dep| format!("{}=warn", dep)));
    directives.join(",")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` wins when set and valid
/// - **Log Level**: otherwise `-v` flags, then the `LOG_LEVEL` environment
///   variable, then [`DEFAULT_LOG_LEVEL`]
/// - **Format**: Compact, with targets and ANSI colors
///
/// Stdout is left to command output so it can be piped.
pub fn init_basic_console_logging(verbosity: u8) -> Result<(), TryInitError> {
    let log_level = level_for_verbosity(verbosity)
        .map(str::to_string)
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;
    tracing::debug!(log.level = %log_level, "Console logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), None);
        assert_eq!(level_for_verbosity(1), Some("info"));
        assert_eq!(level_for_verbosity(2), Some("debug"));
        assert_eq!(level_for_verbosity(9), Some("trace"));
    }

    #[test]
    fn test_filter_directives() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("linguaboard=debug,linguaboard_client=debug"));
        assert!(directives.contains("reqwest=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
