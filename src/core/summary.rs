// OrderSift - core/summary.rs
//
// Per-status order counts, the figures a dashboard shows before the user
// drills into the list for one status.

use crate::core::model::{OrderStatus, SalesOrder};
use serde::Serialize;
use std::collections::BTreeMap;

/// Order counts keyed by status. Every status is present, zero or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub by_status: BTreeMap<OrderStatus, usize>,
    pub total: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Count `orders` per status.
pub fn status_counts<'a, I>(orders: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a SalesOrder>,
{
    let mut by_status: BTreeMap<OrderStatus, usize> =
        OrderStatus::all().iter().map(|&s| (s, 0)).collect();
    let mut total = 0;
    for order in orders {
        *by_status.entry(order.status).or_insert(0) += 1;
        total += 1;
    }
    StatusCounts { by_status, total }
}
