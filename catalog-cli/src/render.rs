//! Plain-text table rendering.

use std::fmt::Write;

use catalog_lib::SelectionTable;
use catalog_lib::model::Record;
use serde_json::Value;

/// Renders the visible page with its checkbox column and the selection footer.
pub fn render_table(table: &SelectionTable) -> String {
    let page = table.page();
    let mut out = String::new();

    if page.current_page() == 0 {
        out.push_str("No page loaded\n");
    } else {
        let _ = writeln!(
            out,
            "Page {} of {} | {} records",
            page.current_page(),
            page.total_pages().max(1),
            page.total_count()
        );
    }

    let checked = table.derived_selection();
    for record in page.records() {
        let mark = if checked.contains(record) { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{}] {:>6}  {}", mark, record.id(), fields(record));
    }

    let _ = write!(out, "{} ({})", table.selected_label(), table.state());
    if let Some(raw) = table.count().raw() {
        let _ = write!(out, " | first N: {}", raw);
    }
    if let Some(requested) = table.requested_page() {
        let _ = write!(out, " | loading page {}", requested);
    }
    out
}

/// Formats a record's display fields as `key=value` pairs.
fn fields(record: &Record) -> String {
    record
        .fields()
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}={}", key, s),
            other => format!("{}={}", key, other),
        })
        .collect::<Vec<_>>()
        .join("  ")
}
