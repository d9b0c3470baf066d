// OrderSift - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::format::DateStyle;
use crate::core::input::DateOrder;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for OrderSift configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/ordersift/ or %APPDATA%\OrderSift\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined. Returns warnings to be logged once logging is up, as
    /// `load_config` does.
    pub fn resolve() -> (Self, Vec<String>) {
        Self::from_project_dirs(ProjectDirs::from("", "", constants::APP_ID))
    }

    fn from_project_dirs(dirs: Option<ProjectDirs>) -> (Self, Vec<String>) {
        match dirs {
            Some(proj_dirs) => (
                Self {
                    config_dir: proj_dirs.config_dir().to_path_buf(),
                },
                Vec::new(),
            ),
            None => (
                Self {
                    config_dir: PathBuf::from("."),
                },
                vec![
                    "Could not determine platform directories; reading config.toml from the current directory."
                        .to_string(),
                ],
            ),
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[filter]` section.
    pub filter: FilterSection,
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[snapshot]` section.
    pub snapshot: SnapshotSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[filter]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// How slash dates without a leading year are read: "mdy" or "dmy".
    pub date_order: Option<String>,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Table date layout: "mdy", "dmy" or "ymd".
    pub date_style: Option<String>,
}

/// `[snapshot]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SnapshotSection {
    /// Largest snapshot file accepted, in bytes.
    pub max_bytes: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Day/month order for ambiguous slash dates in filter input.
    pub date_order: DateOrder,
    /// Date layout in the order table.
    pub date_style: DateStyle,
    /// Largest snapshot file accepted, in bytes.
    pub max_snapshot_bytes: u64,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            date_style: DateStyle::default(),
            max_snapshot_bytes: constants::DEFAULT_MAX_SNAPSHOT_BYTES,
            log_level: None,
        }
    }
}

/// Read and parse a config file without validating values.
pub fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with one
/// warning; the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(&config_path) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Filter: date_order --
    if let Some(ref order) = raw.filter.date_order {
        match DateOrder::parse(order) {
            Some(parsed) => config.date_order = parsed,
            None => warnings.push(format!(
                "[filter] date_order = \"{order}\" is not recognised. \
                 Expected \"mdy\" or \"dmy\". Using default (mdy).",
            )),
        }
    }

    // -- Display: date_style --
    if let Some(ref style) = raw.display.date_style {
        match DateStyle::parse(style) {
            Some(parsed) => config.date_style = parsed,
            None => warnings.push(format!(
                "[display] date_style = \"{style}\" is not recognised. \
                 Expected \"mdy\", \"dmy\" or \"ymd\". Using default (mdy).",
            )),
        }
    }

    // -- Snapshot: max_bytes --
    if let Some(bytes) = raw.snapshot.max_bytes {
        if (constants::MIN_MAX_SNAPSHOT_BYTES..=constants::ABSOLUTE_MAX_SNAPSHOT_BYTES)
            .contains(&bytes)
        {
            config.max_snapshot_bytes = bytes;
        } else {
            warnings.push(format!(
                "[snapshot] max_bytes = {bytes} is out of range ({}-{}). Using default ({}).",
                constants::MIN_MAX_SNAPSHOT_BYTES,
                constants::ABSOLUTE_MAX_SNAPSHOT_BYTES,
                constants::DEFAULT_MAX_SNAPSHOT_BYTES,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) {
        std::fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_platform_dir_fallback_is_reported() {
        let (paths, warnings) = PlatformPaths::from_project_dirs(None);
        assert_eq!(paths.config_dir, PathBuf::from("."));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("current directory"));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.date_order, DateOrder::Mdy);
        assert_eq!(config.max_snapshot_bytes, constants::DEFAULT_MAX_SNAPSHOT_BYTES);
    }

    #[test]
    fn test_valid_config_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[filter]
date_order = "dmy"

[display]
date_style = "YMD"

[snapshot]
max_bytes = 2048

[logging]
level = "Debug"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.date_order, DateOrder::Dmy);
        assert_eq!(config.date_style, DateStyle::Ymd);
        assert_eq!(config.max_snapshot_bytes, 2048);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[filter]
date_order = "ydm"

[snapshot]
max_bytes = 1

[logging]
level = "loud"

[unknown_section]
whatever = true
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert_eq!(config.date_order, DateOrder::Mdy);
        assert_eq!(config.max_snapshot_bytes, constants::DEFAULT_MAX_SNAPSHOT_BYTES);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_unparseable_config_returns_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[filter\ndate_order = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
        assert_eq!(config.date_style, DateStyle::Mdy);
    }
}
