// OrderSift - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr only, so table output on stdout stays pipeable.
// Never logs record contents beyond ids and counts.

use super::constants::{APP_NAME, APP_VERSION, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS};
use tracing_subscriber::EnvFilter;

/// Where the active log level came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelSource {
    /// `RUST_LOG` is set; its directives are used as-is.
    Env,
    DebugFlag,
    /// `[logging] level` from config.toml.
    Config(&'static str),
    Default,
}

impl LevelSource {
    /// Pick the level source. Priority: RUST_LOG > --debug > config > "info".
    ///
    /// The config level is matched case-insensitively against
    /// `VALID_LOG_LEVELS`; anything else falls through to the default.
    fn select(env_set: bool, debug_flag: bool, config_level: Option<&str>) -> Self {
        if env_set {
            return Self::Env;
        }
        if debug_flag {
            return Self::DebugFlag;
        }
        config_level
            .and_then(|level| {
                VALID_LOG_LEVELS
                    .iter()
                    .copied()
                    .find(|valid| valid.eq_ignore_ascii_case(level.trim()))
            })
            .map_or(Self::Default, Self::Config)
    }

    fn filter(self) -> EnvFilter {
        match self {
            Self::Env => EnvFilter::from_default_env(),
            Self::DebugFlag => EnvFilter::new("debug"),
            Self::Config(level) => EnvFilter::new(level),
            Self::Default => EnvFilter::new(DEFAULT_LOG_LEVEL),
        }
    }
}

/// Initialise the logging subsystem.
///
/// `config_level` is the validated `[logging] level` from `AppConfig`.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let source = LevelSource::select(
        std::env::var_os("RUST_LOG").is_some(),
        debug_flag,
        config_level,
    );

    tracing_subscriber::fmt()
        .with_env_filter(source.filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = APP_NAME,
        version = APP_VERSION,
        level_source = ?source,
        "Logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_source_priority() {
        assert_eq!(LevelSource::select(true, true, Some("warn")), LevelSource::Env);
        assert_eq!(
            LevelSource::select(false, true, Some("warn")),
            LevelSource::DebugFlag
        );
        assert_eq!(
            LevelSource::select(false, false, Some("warn")),
            LevelSource::Config("warn")
        );
        assert_eq!(LevelSource::select(false, false, None), LevelSource::Default);
    }

    #[test]
    fn test_config_level_is_normalised_or_ignored() {
        assert_eq!(
            LevelSource::select(false, false, Some(" TRACE ")),
            LevelSource::Config("trace")
        );
        assert_eq!(
            LevelSource::select(false, false, Some("ordersift=trace,loud")),
            LevelSource::Default
        );
    }
}
