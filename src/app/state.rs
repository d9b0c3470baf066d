// OrderSift - app/state.rs
//
// View state management. Holds the loaded snapshot (inside the filter
// engine), the criteria behind the current view, and the view itself as
// indices into the snapshot.
//
// Owned by whoever drives the engine (the CLI here). There is no shared
// or global state: every operation takes `&mut self`.

use crate::core::filter::{DateRange, FilterCriteria, FilterEngine};
use crate::core::model::{OrderStatus, SalesOrder, TimestampField};

/// Snapshot plus the currently displayed filtered view.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Engine owning the unfiltered snapshot (the reset baseline).
    engine: FilterEngine,

    /// Criteria that produced `filtered_indices`. Empty = unfiltered.
    pub criteria: FilterCriteria,

    /// Indices into the snapshot of the orders currently shown.
    pub filtered_indices: Vec<usize>,

    /// One-line description of the view for the status bar.
    pub status_message: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            status_message: "No orders loaded.".to_string(),
            ..Default::default()
        }
    }

    /// Replace the snapshot with freshly fetched orders.
    ///
    /// `initial_status` pre-filters the first view, as when the list is
    /// opened from a dashboard link for one status. The snapshot itself is
    /// stored unfiltered either way.
    pub fn load(&mut self, records: Vec<SalesOrder>, initial_status: Option<OrderStatus>) {
        self.engine.load_snapshot(records);
        let criteria = initial_status
            .map(FilterCriteria::status)
            .unwrap_or_default();
        self.apply_criteria(criteria);
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    /// Show only orders with `status`.
    pub fn show_status(&mut self, status: OrderStatus) {
        self.apply_criteria(FilterCriteria::status(status));
    }

    /// Show only orders whose `field` date falls in `range`.
    pub fn show_date_range(&mut self, field: TimestampField, range: DateRange) {
        self.apply_criteria(FilterCriteria::date_range(field, range));
    }

    /// Show only orders whose contact name equals `name` exactly.
    pub fn search_contact(&mut self, name: &str) {
        self.apply_criteria(FilterCriteria::contact(name));
    }

    /// Replace the view with the snapshot filtered by `criteria`.
    ///
    /// Each call starts over from the snapshot; the previous view does not
    /// narrow the next one. Combine filters by putting them in one criteria.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.filtered_indices = self.engine.apply_indices(&criteria);
        self.criteria = criteria;
        self.refresh_status_message();
    }

    /// Drop every filter and show the whole snapshot again.
    pub fn reset(&mut self) {
        self.apply_criteria(FilterCriteria::default());
    }

    /// Orders in the current view, in snapshot order.
    pub fn visible(&self) -> Vec<&SalesOrder> {
        self.engine.resolve(&self.filtered_indices)
    }

    pub fn visible_count(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_empty()
    }

    fn refresh_status_message(&mut self) {
        self.status_message = if self.is_filtered() {
            format!(
                "Showing {} of {} orders (filtered).",
                self.filtered_indices.len(),
                self.engine.len()
            )
        } else {
            format!("Showing all {} orders.", self.engine.len())
        };
    }
}
