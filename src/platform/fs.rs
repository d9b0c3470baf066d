// OrderSift - platform/fs.rs
//
// Snapshot file reading. A snapshot is the JSON list of sales orders as
// returned by the order API: either a bare array or wrapped in a
// `{"data": [...]}` response envelope.
//
// Record invariants (unique ids, created <= updated) are checked here so
// the filter engine can trust its input.

use crate::core::model::SalesOrder;
use crate::util::error::SnapshotError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// API response envelope: `{"status": 1, "data": [...]}`. Other keys are
/// ignored.
#[derive(Deserialize)]
struct ResponseEnvelope {
    data: Vec<SalesOrder>,
}

/// Parse snapshot bytes as a bare array or a response envelope.
///
/// The shape is picked from the first non-blank byte, so a bad record is
/// reported with its own message and position.
fn parse_records(bytes: &[u8]) -> Result<Vec<SalesOrder>, serde_json::Error> {
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'{') {
        serde_json::from_slice::<ResponseEnvelope>(bytes).map(|envelope| envelope.data)
    } else {
        serde_json::from_slice(bytes)
    }
}

/// Read, parse, and validate a snapshot file.
///
/// Fails if the file is larger than `max_bytes`, is not a list of sales
/// orders, or breaks a record invariant.
pub fn read_snapshot(path: &Path, max_bytes: u64) -> Result<Vec<SalesOrder>, SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(SnapshotError::TooLarge {
            path: path.to_path_buf(),
            size,
            max_size: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let records = parse_records(&bytes).map_err(|e| SnapshotError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_snapshot(&records, path)?;

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        bytes = size,
        "Snapshot read"
    );
    Ok(records)
}

/// Check record invariants: ids are unique and no record was updated
/// before it was created. Reports the first violation found.
pub fn validate_snapshot(records: &[SalesOrder], path: &Path) -> Result<(), SnapshotError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(SnapshotError::DuplicateId {
                path: path.to_path_buf(),
                id: record.id.to_string(),
            });
        }
        if record.updated_time < record.created_time {
            return Err(SnapshotError::TimestampOrder {
                path: path.to_path_buf(),
                id: record.id.to_string(),
            });
        }
    }
    Ok(())
}
