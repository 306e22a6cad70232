//! Shared tracing setup for the server and bridge binaries.
//!
//! Both binaries log to stderr only; in the bridge, stdout is reserved for
//! JSON-RPC envelopes.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Resolves the effective log level from CLI flags and the configured level.
///
/// `--quiet` wins over everything; `-v` flags override the configuration.
#[must_use]
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
pub fn resolve_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber, writing to stderr.
pub fn init(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbosity_and_config() {
        assert_eq!(resolve_level(3, true, "trace"), Level::ERROR);
    }

    #[test]
    fn verbosity_flags_override_config() {
        assert_eq!(resolve_level(1, false, "error"), Level::INFO);
        assert_eq!(resolve_level(2, false, "warn"), Level::DEBUG);
        assert_eq!(resolve_level(3, false, "info"), Level::TRACE);
    }

    #[test]
    fn config_level_used_without_flags() {
        assert_eq!(resolve_level(0, false, "info"), Level::INFO);
        assert_eq!(resolve_level(0, false, "WARN"), Level::WARN);
        assert_eq!(resolve_level(0, false, "bogus"), Level::WARN);
    }
}
