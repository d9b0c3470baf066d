// OrderSift - ui/table.rs
//
// Order table rendered as aligned plain text.
// Columns mirror the order list screen: row number, subject, contact,
// status, total, assignee, created, updated.

use crate::core::format::{datetime_format, DateStyle};
use crate::core::model::SalesOrder;
use crate::util::constants::{TABLE_CELL_MAX_CHARS, TABLE_COLUMN_SEPARATOR};

const HEADERS: [&str; 8] = [
    "No",
    "Subject",
    "Contact",
    "Status",
    "Total",
    "Assigned To",
    "Created",
    "Updated",
];

/// Shorten `text` to at most `max` characters, ending in an ellipsis
/// when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn row_cells(no: usize, order: &SalesOrder, style: DateStyle) -> [String; 8] {
    [
        no.to_string(),
        truncate(&order.subject, TABLE_CELL_MAX_CHARS),
        truncate(&order.contact_name, TABLE_CELL_MAX_CHARS),
        order.status.label().to_string(),
        truncate(&order.total, TABLE_CELL_MAX_CHARS),
        truncate(&order.assigned_to, TABLE_CELL_MAX_CHARS),
        datetime_format(&order.created_time, style),
        datetime_format(&order.updated_time, style),
    ]
}

/// Render `orders` as a table, one line per order, with a header line.
///
/// Rows are numbered from 1 in view order. An empty view renders as a
/// single "No orders match." line.
pub fn render_table(orders: &[&SalesOrder], style: DateStyle) -> String {
    if orders.is_empty() {
        return "No orders match.\n".to_string();
    }

    let rows: Vec<[String; 8]> = orders
        .iter()
        .enumerate()
        .map(|(idx, order)| row_cells(idx + 1, order, style))
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; 8]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(TABLE_COLUMN_SEPARATOR).trim_end());
    out.push('\n');
}
