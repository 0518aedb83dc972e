//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Shown in place of a table with no rows
pub const NO_RESULTS: &str = "No results found.";

/// Format rows as a rounded table, or `empty` when there are none
pub fn format_table_or<T: Tabled>(data: &[T], empty: &str) -> String {
    if data.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format rows as a rounded table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    format_table_or(data, NO_RESULTS)
}
