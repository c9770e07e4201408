//! CSV rendering of tables.

use crate::table::Table;
use crate::value::CellValue;

/// Quote a CSV field, doubling embedded quotes.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Render a table as CSV.
///
/// Quoted header row of column names, then one line per data row in row
/// order. Absent cells render as empty fields.
pub fn render_csv(table: &Table) -> String {
    let mut output = String::new();

    let header: Vec<String> = table.columns().iter().map(|c| quote(c)).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for row in table.rows() {
        let cells: Vec<String> = table
            .columns()
            .iter()
            .map(|c| quote(&row.get(c).map(CellValue::render).unwrap_or_default()))
            .collect();
        output.push_str(&cells.join(","));
        output.push('\n');
    }

    output
}
