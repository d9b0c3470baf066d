// OrderSift - core/filter.rs
//
// Filter engine for sales-order snapshots.
//
// Every filter call starts from the stored snapshot, never from the result
// of a previous call. Callers that need several filters at once compose
// them explicitly through `FilterCriteria`, whose active fields are
// AND-combined.
//
// Core layer: pure logic, no I/O. Inputs are already typed; raw strings
// are validated in `core::input`.

use crate::core::model::{OrderStatus, SalesOrder, TimestampField};
use chrono::NaiveDate;

/// Inclusive calendar-date range. An inverted range (`from > to`) is legal
/// and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// True if `date` lies within `[from, to]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

/// Complete filter state. All set fields are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact status. None = any status.
    pub status: Option<OrderStatus>,

    /// Range on the created date. None = no bound.
    pub created: Option<DateRange>,

    /// Range on the last-updated date. None = no bound.
    pub updated: Option<DateRange>,

    /// Exact, case-sensitive contact name. None = any contact.
    pub contact_name: Option<String>,
}

impl FilterCriteria {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.created.is_none()
            && self.updated.is_none()
            && self.contact_name.is_none()
    }

    /// Criteria matching a single status.
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Criteria matching a date range on one timestamp field.
    pub fn date_range(field: TimestampField, range: DateRange) -> Self {
        let mut criteria = Self::default();
        criteria.set_range(field, Some(range));
        criteria
    }

    /// Criteria matching one contact name exactly.
    pub fn contact(name: &str) -> Self {
        Self {
            contact_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Set or clear the range for `field`.
    pub fn set_range(&mut self, field: TimestampField, range: Option<DateRange>) {
        match field {
            TimestampField::CreatedTime => self.created = range,
            TimestampField::UpdatedTime => self.updated = range,
        }
    }

    /// Check a single order against all active criteria.
    pub fn matches(&self, order: &SalesOrder) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }

        if let Some(range) = self.created {
            if !range.contains(order.date_of(TimestampField::CreatedTime)) {
                return false;
            }
        }

        if let Some(range) = self.updated {
            if !range.contains(order.date_of(TimestampField::UpdatedTime)) {
                return false;
            }
        }

        // Exact match only: no trimming, no case folding, no substrings.
        if let Some(ref name) = self.contact_name {
            if order.contact_name != *name {
                return false;
            }
        }

        true
    }
}

/// Holds the unfiltered snapshot and derives filtered views from it.
///
/// The snapshot is the reset baseline and is never modified by filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    snapshot: Vec<SalesOrder>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(records: Vec<SalesOrder>) -> Self {
        let mut engine = Self::new();
        engine.load_snapshot(records);
        engine
    }

    /// Store a freshly fetched list as the new baseline, replacing the old one.
    pub fn load_snapshot(&mut self, records: Vec<SalesOrder>) {
        tracing::debug!(records = records.len(), "Snapshot loaded");
        self.snapshot = records;
    }

    /// The full, unfiltered snapshot.
    pub fn snapshot(&self) -> &[SalesOrder] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    // -------------------------------------------------------------------------
    // Index views
    // -------------------------------------------------------------------------

    /// Indices into the snapshot of every order matching `criteria`,
    /// in snapshot order. Avoids cloning orders for callers that keep a view.
    pub fn apply_indices(&self, criteria: &FilterCriteria) -> Vec<usize> {
        if criteria.is_empty() {
            return (0..self.snapshot.len()).collect();
        }

        // An inverted range can never match; skip the scan.
        let inverted = [criteria.created, criteria.updated]
            .iter()
            .flatten()
            .any(DateRange::is_inverted);
        if inverted {
            tracing::debug!("Inverted date range; result is empty");
            return Vec::new();
        }

        let indices: Vec<usize> = self
            .snapshot
            .iter()
            .enumerate()
            .filter(|(_, order)| criteria.matches(order))
            .map(|(idx, _)| idx)
            .collect();

        tracing::debug!(
            matched = indices.len(),
            total = self.snapshot.len(),
            "Filter applied"
        );
        indices
    }

    /// Resolve snapshot indices to orders. Out-of-range indices are skipped.
    pub fn resolve(&self, indices: &[usize]) -> Vec<&SalesOrder> {
        indices
            .iter()
            .filter_map(|&idx| self.snapshot.get(idx))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Record views
    // -------------------------------------------------------------------------

    /// Orders with exactly this status, in snapshot order.
    pub fn filter_by_status(&self, status: OrderStatus) -> Vec<&SalesOrder> {
        self.apply(&FilterCriteria::status(status))
    }

    /// Orders whose `field`, truncated to its calendar date, is within
    /// `[from, to]`. Empty when `from > to`.
    pub fn filter_by_date_range(
        &self,
        field: TimestampField,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<&SalesOrder> {
        self.apply(&FilterCriteria::date_range(field, DateRange::new(from, to)))
    }

    /// Orders whose contact name equals `name` exactly (case-sensitive,
    /// no partial match). "alice" does not find "Alice".
    pub fn search_by_exact_contact_name(&self, name: &str) -> Vec<&SalesOrder> {
        self.apply(&FilterCriteria::contact(name))
    }

    /// All active criteria AND-combined over the snapshot.
    pub fn apply(&self, criteria: &FilterCriteria) -> Vec<&SalesOrder> {
        self.resolve(&self.apply_indices(criteria))
    }

    /// The whole snapshot in its original order.
    pub fn reset(&self) -> Vec<&SalesOrder> {
        self.snapshot.iter().collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::model::OrderId;
    use chrono::{TimeZone, Utc};

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn make_order(
        id: &str,
        status: OrderStatus,
        contact: &str,
        created: (i32, u32, u32),
        updated: (i32, u32, u32),
    ) -> SalesOrder {
        SalesOrder {
            id: OrderId::from(id),
            subject: format!("Order {id}"),
            contact_name: contact.to_string(),
            status,
            total: "100".to_string(),
            assigned_to: "admin".to_string(),
            description: None,
            created_time: Utc
                .with_ymd_and_hms(created.0, created.1, created.2, 14, 30, 0)
                .unwrap(),
            updated_time: Utc
                .with_ymd_and_hms(updated.0, updated.1, updated.2, 23, 59, 59)
                .unwrap(),
        }
    }

    fn ids(orders: &[&SalesOrder]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    fn sample() -> FilterEngine {
        FilterEngine::with_snapshot(vec![
            make_order("1", OrderStatus::Created, "Alice", (2024, 1, 5), (2024, 1, 5)),
            make_order("2", OrderStatus::Approved, "Bob", (2024, 2, 10), (2024, 3, 1)),
            make_order("3", OrderStatus::Approved, "alice", (2024, 1, 31), (2024, 2, 2)),
            make_order("4", OrderStatus::Delivered, "Alice Smith", (2023, 12, 31), (2024, 1, 1)),
            make_order("5", OrderStatus::Canceled, "Alice", (2024, 3, 15), (2024, 3, 20)),
        ])
    }

    #[test]
    fn test_alice_bob_scenario() {
        let engine = FilterEngine::with_snapshot(vec![
            make_order("1", OrderStatus::Created, "Alice", (2024, 1, 5), (2024, 1, 5)),
            make_order("2", OrderStatus::Approved, "Bob", (2024, 2, 10), (2024, 2, 10)),
        ]);

        assert_eq!(ids(&engine.filter_by_status(OrderStatus::Approved)), vec!["2"]);
        assert_eq!(
            ids(&engine.filter_by_date_range(
                TimestampField::CreatedTime,
                date(2024, 1, 1),
                date(2024, 1, 31)
            )),
            vec!["1"]
        );
        assert_eq!(ids(&engine.reset()), vec!["1", "2"]);
    }

    #[test]
    fn test_status_filters_partition_snapshot() {
        let engine = sample();
        let mut seen: Vec<String> = Vec::new();
        for &status in OrderStatus::all() {
            let part = engine.filter_by_status(status);
            assert!(part.iter().all(|o| o.status == status));
            seen.extend(ids(&part));
        }
        seen.sort();
        let mut all = ids(&engine.reset());
        all.sort();
        assert_eq!(seen, all, "parts must cover the snapshot exactly once");
    }

    #[test]
    fn test_status_filter_preserves_order() {
        assert_eq!(ids(&sample().filter_by_status(OrderStatus::Approved)), vec!["2", "3"]);
    }

    #[test]
    fn test_status_no_match_is_empty() {
        let engine = FilterEngine::with_snapshot(vec![make_order(
            "1",
            OrderStatus::Created,
            "Alice",
            (2024, 1, 5),
            (2024, 1, 5),
        )]);
        assert!(engine.filter_by_status(OrderStatus::Delivered).is_empty());
    }

    #[test]
    fn test_date_range_ignores_time_of_day() {
        // Order 1 was created at 14:30 on Jan 5; a single-day range still matches.
        let engine = sample();
        let result = engine.filter_by_date_range(
            TimestampField::CreatedTime,
            date(2024, 1, 5),
            date(2024, 1, 5),
        );
        assert_eq!(ids(&result), vec!["1"]);

        // Updated at 23:59:59 on Jan 1 counts as Jan 1.
        let result = engine.filter_by_date_range(
            TimestampField::UpdatedTime,
            date(2024, 1, 1),
            date(2024, 1, 1),
        );
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_date_range_bounds_inclusive() {
        let engine = sample();
        let result = engine.filter_by_date_range(
            TimestampField::CreatedTime,
            date(2023, 12, 31),
            date(2024, 1, 31),
        );
        assert_eq!(ids(&result), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_date_range_uses_selected_field() {
        let engine = sample();
        let created =
            engine.filter_by_date_range(TimestampField::CreatedTime, date(2024, 3, 1), date(2024, 3, 1));
        let updated =
            engine.filter_by_date_range(TimestampField::UpdatedTime, date(2024, 3, 1), date(2024, 3, 1));
        assert!(created.is_empty());
        assert_eq!(ids(&updated), vec!["2"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let engine = sample();
        for field in [TimestampField::CreatedTime, TimestampField::UpdatedTime] {
            assert!(engine
                .filter_by_date_range(field, date(2025, 1, 1), date(2023, 1, 1))
                .is_empty());
        }
    }

    #[test]
    fn test_widening_range_never_drops_records() {
        let engine = sample();
        let narrow = ids(&engine.filter_by_date_range(
            TimestampField::CreatedTime,
            date(2024, 1, 10),
            date(2024, 2, 10),
        ));
        for (from, to) in [
            (date(2024, 1, 1), date(2024, 2, 10)),
            (date(2024, 1, 10), date(2024, 3, 31)),
            (date(2000, 1, 1), date(2100, 1, 1)),
        ] {
            let wide = ids(&engine.filter_by_date_range(TimestampField::CreatedTime, from, to));
            for id in &narrow {
                assert!(wide.contains(id), "{id} dropped when widening to {from}..{to}");
            }
        }
    }

    #[test]
    fn test_contact_search_is_exact() {
        let engine = sample();
        assert_eq!(ids(&engine.search_by_exact_contact_name("Alice")), vec!["1", "5"]);
        assert_eq!(ids(&engine.search_by_exact_contact_name("alice")), vec!["3"]);
        assert!(engine.search_by_exact_contact_name("Ali").is_empty());
        assert!(engine.search_by_exact_contact_name("ALICE").is_empty());
        assert!(engine.search_by_exact_contact_name("Alice ").is_empty());
    }

    #[test]
    fn test_filters_start_from_snapshot() {
        let engine = sample();
        let _ = engine.filter_by_status(OrderStatus::Canceled);
        // A second call is not narrowed by the first.
        assert_eq!(ids(&engine.filter_by_status(OrderStatus::Approved)), vec!["2", "3"]);
        assert_eq!(engine.len(), 5);
    }

    #[test]
    fn test_reset_is_idempotent_and_reflects_latest_load() {
        let mut engine = sample();
        let first = ids(&engine.reset());
        assert_eq!(first, ids(&engine.reset()));

        engine.load_snapshot(vec![make_order(
            "9",
            OrderStatus::Created,
            "Zed",
            (2024, 5, 5),
            (2024, 5, 5),
        )]);
        assert_eq!(ids(&engine.reset()), vec!["9"]);
        assert_eq!(ids(&engine.reset()), vec!["9"]);
    }

    #[test]
    fn test_criteria_and_equals_intersection() {
        let engine = sample();
        let range = DateRange::new(date(2024, 1, 1), date(2024, 2, 28));
        let criteria = FilterCriteria {
            status: Some(OrderStatus::Approved),
            created: Some(range),
            ..Default::default()
        };
        let combined = ids(&engine.apply(&criteria));

        let by_status = ids(&engine.filter_by_status(OrderStatus::Approved));
        let by_date =
            ids(&engine.filter_by_date_range(TimestampField::CreatedTime, range.from, range.to));
        let intersection: Vec<String> =
            by_status.into_iter().filter(|id| by_date.contains(id)).collect();

        assert_eq!(combined, intersection);
        assert_eq!(combined, vec!["2", "3"]);
    }

    #[test]
    fn test_empty_criteria_returns_all() {
        let engine = sample();
        assert!(FilterCriteria::default().is_empty());
        assert_eq!(engine.apply_indices(&FilterCriteria::default()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_snapshot() {
        let engine = FilterEngine::new();
        assert!(engine.is_empty());
        assert!(engine.reset().is_empty());
        assert!(engine.filter_by_status(OrderStatus::Created).is_empty());
    }

    #[test]
    fn test_resolve_skips_stale_indices() {
        let engine = sample();
        assert_eq!(ids(&engine.resolve(&[4, 99, 0])), vec!["5", "1"]);
    }
}
