// OrderSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// Field names on the wire follow the document store's sales-order schema
// (`_id`, `contactName`, `createdTime`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Sales order
// =============================================================================

/// Opaque, immutable record identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A single sales order as fetched from storage.
///
/// This is the unit that flows through filtering, display, and export.
/// The filter engine only ever reads these; it never mutates or persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    /// Unique within a snapshot.
    #[serde(rename = "_id", alias = "id")]
    pub id: OrderId,

    pub subject: String,

    /// Matched exactly (case-sensitive) by the contact search.
    pub contact_name: String,

    pub status: OrderStatus,

    /// Amount as entered in the order form. Stored as text upstream.
    pub total: String,

    pub assigned_to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Set once at creation.
    pub created_time: DateTime<Utc>,

    /// Refreshed on every edit. Never earlier than `created_time`.
    pub updated_time: DateTime<Utc>,
}

impl SalesOrder {
    /// Value of the given timestamp field.
    pub fn timestamp(&self, field: TimestampField) -> DateTime<Utc> {
        match field {
            TimestampField::CreatedTime => self.created_time,
            TimestampField::UpdatedTime => self.updated_time,
        }
    }

    /// Calendar date (UTC) of the given timestamp field, time of day discarded.
    pub fn date_of(&self, field: TimestampField) -> NaiveDate {
        self.timestamp(field).date_naive()
    }
}

// =============================================================================
// Status
// =============================================================================

/// Lifecycle status of a sales order. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    Approved,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// All variants in display order (the order of the status picker).
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Created,
            OrderStatus::Approved,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
        ]
    }

    /// Human-readable label, identical to the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::Approved => "Approved",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Timestamp field selector
// =============================================================================

/// Which of the two timestamps a date-range filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampField {
    CreatedTime,
    UpdatedTime,
}

impl TimestampField {
    /// Field name as it appears in the stored document.
    pub fn name(&self) -> &'static str {
        match self {
            TimestampField::CreatedTime => "createdTime",
            TimestampField::UpdatedTime => "updatedTime",
        }
    }
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
