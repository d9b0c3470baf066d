// OrderSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every failure names its subsystem
// and keeps the underlying cause reachable through `source()`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all OrderSift operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum OrderSiftError {
    /// A raw filter value was rejected at the input boundary.
    Validation(ValidationError),

    /// Snapshot loading or validation failed.
    Snapshot(SnapshotError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl OrderSiftError {
    /// True when the error was caused by user input rather than the
    /// environment. The CLI uses this to pick its exit code.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for OrderSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Invalid input: {e}"),
            Self::Snapshot(e) => write!(f, "Snapshot error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for OrderSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Snapshot(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// A raw (string) filter value could not be converted into a typed value.
///
/// Raised only at the boundary; the filter engine never sees untyped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Status label is not one of Created, Approved, Delivered, Canceled.
    UnknownStatus { value: String },

    /// Timestamp field name is not createdTime or updatedTime.
    UnknownField { value: String },

    /// A date input was empty or whitespace.
    EmptyDate { field: &'static str },

    /// A date input could not be parsed in any accepted format.
    InvalidDate { field: &'static str, value: String },

    /// Only one end of a date range was supplied.
    IncompleteRange { field: &'static str },

    /// Export format is not csv or json.
    UnknownExportFormat { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStatus { value } => write!(
                f,
                "unknown status '{value}'. Expected one of: Created, Approved, Delivered, Canceled"
            ),
            Self::UnknownField { value } => write!(
                f,
                "unknown date field '{value}'. Expected createdTime or updatedTime"
            ),
            Self::EmptyDate { field } => write!(f, "{field}: date is empty"),
            Self::InvalidDate { field, value } => write!(
                f,
                "{field}: cannot parse date '{value}'. \
                 Use YYYY-MM-DD, YYYY/MM/DD or a slash date in the configured order"
            ),
            Self::IncompleteRange { field } => write!(
                f,
                "{field}: both the start and the end of the range must be given"
            ),
            Self::UnknownExportFormat { value } => {
                write!(f, "unknown export format '{value}'. Expected csv or json")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for OrderSiftError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Snapshot errors
// ---------------------------------------------------------------------------

/// Errors related to reading a sales-order snapshot from disk.
#[derive(Debug)]
pub enum SnapshotError {
    /// I/O error reading the snapshot file.
    Io { path: PathBuf, source: io::Error },

    /// Snapshot file exceeds the configured size limit.
    TooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Snapshot content is not a valid JSON array of sales orders.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two records share the same id.
    DuplicateId { path: PathBuf, id: String },

    /// A record was updated before it was created.
    TimestampOrder { path: PathBuf, id: String },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read snapshot '{}': {source}", path.display())
            }
            Self::TooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "snapshot '{}' is {size} bytes, exceeds maximum of {max_size} bytes. \
                 Raise [snapshot] max_bytes in config",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "snapshot '{}' is not valid: {source}", path.display())
            }
            Self::DuplicateId { path, id } => {
                write!(f, "snapshot '{}': duplicate id '{id}'", path.display())
            }
            Self::TimestampOrder { path, id } => write!(
                f,
                "snapshot '{}': record '{id}' has updatedTime before createdTime",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<SnapshotError> for OrderSiftError {
    fn from(e: SnapshotError) -> Self {
        Self::Snapshot(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for OrderSiftError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for OrderSiftError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for OrderSift results.
pub type Result<T> = std::result::Result<T, OrderSiftError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_is_flagged() {
        let err: OrderSiftError = ValidationError::UnknownStatus {
            value: "Shipped".to_string(),
        }
        .into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Shipped"));
    }

    #[test]
    fn test_snapshot_io_error_keeps_source() {
        let err: OrderSiftError = SnapshotError::Io {
            path: PathBuf::from("orders.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .into();
        assert!(!err.is_validation());
        let inner = err.source().unwrap();
        assert!(inner.source().is_some(), "io cause must stay reachable");
    }
}
