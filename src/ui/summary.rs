// OrderSift - ui/summary.rs
//
// Status summary block: one line per status with its order count,
// followed by the total.

use crate::core::model::OrderStatus;
use crate::core::summary::StatusCounts;

/// Render per-status counts, statuses in picker order.
pub fn render_summary(counts: &StatusCounts) -> String {
    let label_width = OrderStatus::all()
        .iter()
        .map(|s| s.label().len())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    let count_width = counts.total.to_string().len();

    let mut out = String::new();
    for &status in OrderStatus::all() {
        out.push_str(&format!(
            "{:<label_width$}  {:>count_width$}\n",
            status.label(),
            counts.get(status)
        ));
    }
    out.push_str(&format!(
        "{:<label_width$}  {:>count_width$}\n",
        "Total", counts.total
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::tests::make_order;
    use crate::core::summary::status_counts;

    #[test]
    fn test_summary_lists_all_statuses() {
        let orders: Vec<_> = (0..12)
            .map(|i| {
                let status = if i < 10 {
                    OrderStatus::Approved
                } else {
                    OrderStatus::Canceled
                };
                make_order(&i.to_string(), status, "A", (2024, 1, 1), (2024, 1, 1))
            })
            .collect();
        let text = render_summary(&status_counts(&orders));
        assert_eq!(
            text,
            "Created     0\nApproved   10\nDelivered   0\nCanceled    2\nTotal      12\n"
        );
    }
}
