//! Fixed-width text rendering of tables.

use std::io::Write;

use crate::table::{Table, TableRow};
use crate::value::CellValue;
use crate::Result;

/// Default minimum width of a rendered field, in characters
pub const FIELD_WIDTH: usize = 20;

/// Formatting options for fixed-width text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Minimum field width; longer values grow the field, untruncated
    pub field_width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
        }
    }
}

impl TextOptions {
    /// Create options with the default field width
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the minimum field width
    pub fn field_width(mut self, width: usize) -> Self {
        self.field_width = width;
        self
    }
}

/// Format one cell: a leading space, the text left-justified in a
/// minimum-width field, and a trailing space. Cells are concatenated
/// with no further separator.
fn format_cell(text: &str, width: usize) -> String {
    format!(" {:<width$} ", text)
}

fn header_line(table: &Table, width: usize) -> String {
    let mut line = String::new();
    for column in table.columns() {
        line.push_str(&format_cell(column, width));
    }
    line
}

fn row_line(table: &Table, row: &TableRow, width: usize) -> String {
    let mut line = String::new();
    for column in table.columns() {
        let cell = row.get(column).map(CellValue::render).unwrap_or_default();
        line.push_str(&format_cell(&cell, width));
    }
    line
}

/// Write a table to `out` as fixed-width text with default options.
///
/// One header line, then one line per row in row order. The sink stays
/// caller-owned: it is neither flushed nor closed here.
pub fn write_table<W: Write>(table: &Table, out: &mut W) -> Result<()> {
    write_table_with(table, out, TextOptions::default())
}

/// Write a table to `out` as fixed-width text with explicit options.
pub fn write_table_with<W: Write>(table: &Table, out: &mut W, options: TextOptions) -> Result<()> {
    writeln!(out, "{}", header_line(table, options.field_width))?;
    for row in table.rows() {
        writeln!(out, "{}", row_line(table, row, options.field_width))?;
    }
    Ok(())
}

/// Render a table to a String with default options.
pub fn render_table(table: &Table) -> String {
    render_table_with(table, TextOptions::default())
}

/// Render a table to a String with explicit options.
pub fn render_table_with(table: &Table, options: TextOptions) -> String {
    let mut text = String::new();
    text.push_str(&header_line(table, options.field_width));
    text.push('\n');
    for row in table.rows() {
        text.push_str(&row_line(table, row, options.field_width));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldSpec};
    use crate::record::Record;

    struct Person {
        name: String,
        age: u32,
    }

    impl Person {
        fn new(name: &str, age: u32) -> Self {
            Self {
                name: name.to_string(),
                age,
            }
        }
    }

    impl Record for Person {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new(FieldSpec::display_as("Name", "FullName"), self.name.as_str()),
                Field::new(FieldSpec::new("Age"), i64::from(self.age)),
            ]
        }
    }

    fn person_table() -> Table {
        Table::from_records(&[Person::new("Person1", 29), Person::new("Person2", 35)])
    }

    #[test]
    fn test_person_fixture() {
        let expected = format!(
            " {:<20}  {:<20} \n {:<20}  {:<20} \n {:<20}  {:<20} \n",
            "FullName", "Age", "Person1", "29", "Person2", "35"
        );
        assert_eq!(render_table(&person_table()), expected);
    }

    #[test]
    fn test_write_table_matches_render() {
        let table = person_table();
        let mut buf = Vec::new();
        write_table(&table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_table(&table));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let table = person_table();
        assert_eq!(render_table(&table), render_table(&table));

        let mut first = Vec::new();
        let mut second = Vec::new();
        write_table(&table, &mut first).unwrap();
        write_table(&table, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_long_value_grows_field() {
        let long = "a".repeat(30);
        let table = Table::from_records(&[Person::new(&long, 29)]);
        let text = render_table(&table);

        // Untruncated, with the single-space padding intact
        assert!(text.contains(&format!(" {} ", long)));
        let data_line = text.lines().nth(1).unwrap();
        assert!(data_line.len() > 2 * (FIELD_WIDTH + 2));
    }

    #[test]
    fn test_empty_table_writes_header_terminator() {
        let table = Table::new();
        assert_eq!(render_table(&table), "\n");

        let mut buf = Vec::new();
        write_table(&table, &mut buf).unwrap();
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn test_missing_cell_renders_empty_field() {
        struct Sparse;
        impl Record for Sparse {
            fn fields(&self) -> Vec<Field> {
                vec![Field::new(FieldSpec::new("A"), 1i64)]
            }
        }
        struct Wide;
        impl Record for Wide {
            fn fields(&self) -> Vec<Field> {
                vec![
                    Field::new(FieldSpec::new("A"), 2i64),
                    Field::new(FieldSpec::new("B"), 3i64),
                ]
            }
        }

        let sparse = Sparse;
        let wide = Wide;
        let records: Vec<&dyn Record> = vec![&sparse, &wide];
        let text = render_table(&Table::from_records(records));

        let expected = format!(
            " {:<20}  {:<20} \n {:<20}  {:<20} \n {:<20}  {:<20} \n",
            "A", "B", "1", "", "2", "3"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_custom_field_width() {
        let table = person_table();
        let text = render_table_with(&table, TextOptions::new().field_width(10));
        let expected_header = format!(" {:<10}  {:<10} ", "FullName", "Age");
        assert_eq!(text.lines().next().unwrap(), expected_header);
    }
}
