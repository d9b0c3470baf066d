// OrderSift - core/input.rs
//
// Boundary validation: converts raw form/CLI strings into the typed values
// the filter engine accepts. Nothing untyped gets past this module.
//
// Core layer: pure logic, no I/O.

use crate::core::filter::{DateRange, FilterCriteria};
use crate::core::model::{OrderStatus, TimestampField};
use crate::util::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};

/// Day/month order used when a date is written with slashes and no
/// leading year (`1/5/2024`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    /// Month first: `1/5/2024` is January 5. Matches the order form's picker.
    #[default]
    Mdy,
    /// Day first: `1/5/2024` is May 1.
    Dmy,
}

impl DateOrder {
    /// Parse `mdy` / `dmy` (any case). Used for config and CLI values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mdy" => Some(Self::Mdy),
            "dmy" => Some(Self::Dmy),
            _ => None,
        }
    }

    fn slash_format(&self) -> &'static str {
        match self {
            DateOrder::Mdy => "%m/%d/%Y",
            DateOrder::Dmy => "%d/%m/%Y",
        }
    }
}

/// Parse a status label. Surrounding whitespace and letter case are ignored.
pub fn parse_status(raw: &str) -> Result<OrderStatus, ValidationError> {
    let wanted = raw.trim();
    OrderStatus::all()
        .iter()
        .copied()
        .find(|s| s.label().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ValidationError::UnknownStatus {
            value: raw.to_string(),
        })
}

/// Parse a timestamp field name.
///
/// Accepts the document name (`createdTime`), snake case (`created_time`)
/// and the short form (`created`), case-insensitively.
pub fn parse_field(raw: &str) -> Result<TimestampField, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "createdtime" | "created_time" | "created" => Ok(TimestampField::CreatedTime),
        "updatedtime" | "updated_time" | "updated" => Ok(TimestampField::UpdatedTime),
        _ => Err(ValidationError::UnknownField {
            value: raw.to_string(),
        }),
    }
}

/// Parse a calendar date.
///
/// Accepted forms, tried in order:
/// - RFC 3339 timestamp (date taken in UTC)
/// - `YYYY-MM-DD` and `YYYY/MM/DD`
/// - `M/D/YYYY` or `D/M/YYYY` depending on `order`
///
/// The year must be written with four digits; `1/5/24` is rejected.
///
/// Anything after `", "` is dropped first, so a displayed
/// `"1/5/2024, 2:30 pm"` value parses as its date.
///
/// `label` names the input in error messages.
pub fn parse_date(
    raw: &str,
    order: DateOrder,
    label: &'static str,
) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDate { field: label });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }

    let date_part = trimmed
        .split_once(", ")
        .map_or(trimmed, |(date, _)| date)
        .trim();

    for format in ["%Y-%m-%d", "%Y/%m/%d", order.slash_format()] {
        if !has_four_digit_year(date_part, format) {
            continue;
        }
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return Ok(date);
        }
    }

    tracing::debug!(input = raw, field = label, "Rejected unparseable date");
    Err(ValidationError::InvalidDate {
        field: label,
        value: raw.to_string(),
    })
}

/// True if the year token of `date_part`, as laid out by `format`, is
/// exactly four ASCII digits. chrono's `%Y` also takes `24` or `1`.
fn has_four_digit_year(date_part: &str, format: &str) -> bool {
    let separator = if format.contains('-') { '-' } else { '/' };
    let tokens: Vec<&str> = date_part.split(separator).collect();
    if tokens.len() != 3 {
        return false;
    }
    let year = if format.starts_with("%Y") {
        tokens[0]
    } else {
        tokens[2]
    };
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

/// Parse both ends of a date range. An inverted range is returned as-is.
pub fn parse_date_range(
    from: &str,
    to: &str,
    order: DateOrder,
) -> Result<DateRange, ValidationError> {
    let from = parse_date(from, order, "from")?;
    let to = parse_date(to, order, "to")?;
    if from > to {
        tracing::debug!(%from, %to, "Inverted date range accepted; it will match nothing");
    }
    Ok(DateRange::new(from, to))
}

// =============================================================================
// Whole filter form
// =============================================================================

/// One date-range row of the filter form, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RawDateRange {
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// The filter form's raw values. Empty strings count as "not set".
#[derive(Debug, Clone, Default)]
pub struct RawFilterInput {
    pub status: Option<String>,
    pub ranges: Vec<RawDateRange>,
    pub contact_name: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl FilterCriteria {
    /// Validate every raw value and build typed criteria.
    ///
    /// Fails on the first invalid value; nothing is partially applied.
    /// A later range for the same field replaces an earlier one.
    /// The contact name is kept verbatim because the search is exact.
    pub fn from_raw(raw: &RawFilterInput, order: DateOrder) -> Result<Self, ValidationError> {
        let mut criteria = FilterCriteria {
            status: non_empty(&raw.status).map(parse_status).transpose()?,
            ..Default::default()
        };

        for row in &raw.ranges {
            let field = parse_field(&row.field)?;
            let range = match (non_empty(&row.from), non_empty(&row.to)) {
                (None, None) => continue,
                (Some(from), Some(to)) => parse_date_range(from, to, order)?,
                _ => {
                    return Err(ValidationError::IncompleteRange {
                        field: field.name(),
                    })
                }
            };
            criteria.set_range(field, Some(range));
        }

        // Only "" means unset: a whitespace-only name is an exact search too.
        criteria.contact_name = raw
            .contact_name
            .as_ref()
            .filter(|name| !name.is_empty())
            .cloned();

        Ok(criteria)
    }
}
