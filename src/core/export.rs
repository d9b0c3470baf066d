// OrderSift - core/export.rs
//
// CSV and JSON export of a filtered order view.
// Core layer: writes to any Write trait object.

use crate::core::model::SalesOrder;
use crate::util::error::{ExportError, ValidationError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Parse an explicit format name (`csv` or `json`, any case).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(ValidationError::UnknownExportFormat {
                value: raw.to_string(),
            }),
        }
    }

    /// Guess from the file extension. Anything but `.json` exports as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// Export orders to CSV format.
///
/// Writes: id, subject, contact_name, status, total, assigned_to,
/// description, created_time, updated_time (RFC 3339).
pub fn export_csv<W: Write>(
    orders: &[&SalesOrder],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "subject",
            "contact_name",
            "status",
            "total",
            "assigned_to",
            "description",
            "created_time",
            "updated_time",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for order in orders {
        let created = order.created_time.to_rfc3339();
        let updated = order.updated_time.to_rfc3339();
        csv_writer
            .write_record([
                order.id.as_str(),
                order.subject.as_str(),
                order.contact_name.as_str(),
                order.status.label(),
                order.total.as_str(),
                order.assigned_to.as_str(),
                order.description.as_deref().unwrap_or(""),
                created.as_str(),
                updated.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export orders to JSON format (array of documents, store field names).
pub fn export_json<W: Write>(
    orders: &[&SalesOrder],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, orders).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(orders.len())
}

/// Create `path` and write `orders` to it in `format`.
pub fn export_to_file(
    orders: &[&SalesOrder],
    path: &Path,
    format: ExportFormat,
) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: PathBuf::from(path),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let count = match format {
        ExportFormat::Csv => export_csv(orders, writer, path)?,
        ExportFormat::Json => export_json(orders, writer, path)?,
    };
    tracing::info!(path = %path.display(), ?format, count, "Export written");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::tests::make_order;
    use crate::core::model::OrderStatus;

    #[test]
    fn test_csv_export() {
        let mut first = make_order("1", OrderStatus::Created, "Alice", (2024, 1, 5), (2024, 1, 5));
        first.description = Some("rush, please".to_string());
        let second = make_order("2", OrderStatus::Approved, "Bob", (2024, 2, 10), (2024, 2, 10));
        let mut buf = Vec::new();
        let count = export_csv(&[&first, &second], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,subject,contact_name,status"));
        assert!(output.contains("\"rush, please\""));
        assert!(output.contains("Approved"));
        assert!(output.contains("2024-02-10T14:30:00+00:00"));
    }

    #[test]
    fn test_json_export_uses_document_names() {
        let order = make_order("1", OrderStatus::Delivered, "Alice", (2024, 1, 5), (2024, 1, 5));
        let mut buf = Vec::new();
        let count = export_json(&[&order], &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"_id\": \"1\""));
        assert!(output.contains("\"contactName\": \"Alice\""));
        assert!(!output.contains("description"));
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(ExportFormat::parse("JSON").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::parse("xlsx").is_err());
        assert_eq!(ExportFormat::from_path(Path::new("a/b.Json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("orders")), ExportFormat::Csv);
    }
}
