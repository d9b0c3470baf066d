// OrderSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "OrderSift";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "OrderSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Snapshot limits
// =============================================================================

/// Default maximum size of a snapshot file in bytes.
pub const DEFAULT_MAX_SNAPSHOT_BYTES: u64 = 64 * 1024 * 1024; // 64 MB

/// Smallest user-configurable snapshot size limit.
pub const MIN_MAX_SNAPSHOT_BYTES: u64 = 1024; // 1 KB

/// Hard upper bound on the snapshot size limit (prevents configuration mistakes).
pub const ABSOLUTE_MAX_SNAPSHOT_BYTES: u64 = 1024 * 1024 * 1024; // 1 GB

// =============================================================================
// Display
// =============================================================================

/// Maximum characters shown per text cell in the terminal table.
/// Longer values are truncated with an ellipsis.
pub const TABLE_CELL_MAX_CHARS: usize = 24;

/// Column separator for the terminal table.
pub const TABLE_COLUMN_SEPARATOR: &str = "  ";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Filesystem names
// =============================================================================

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
