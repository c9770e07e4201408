//! Table model and the record-to-table mapper.
//!
//! The data flow is:
//! 1. Record instances (anything implementing `Record`)
//! 2. `Table::from_records` (column accumulation + eligibility)
//! 3. `Table` (ordered columns, ordered rows, ready for output)
//!
//! The table is a pure data structure that can be handed to the output
//! renderers or serialized to JSON - no computation happens after mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RowcastError;
use crate::record::Record;
use crate::value::CellValue;
use crate::Result;

/// A single row: the cells one record instance produced.
///
/// Keyed by effective column name. A column the instance didn't produce
/// has no entry; output renderers treat such cells as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(flatten)]
    cells: BTreeMap<String, CellValue>,
}

impl TableRow {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, column: &str, value: CellValue) {
        self.cells.insert(column.to_string(), value);
    }

    /// Value under `column`, if this row has one
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Value under `column`, or `ColumnNotFound`
    pub fn require(&self, column: &str) -> Result<&CellValue> {
        self.get(column).ok_or_else(|| RowcastError::ColumnNotFound {
            name: column.to_string(),
        })
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if this row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Ordered columns and rows produced by the mapper.
///
/// Column order is first-seen order across all input records; row order
/// is input order. The table is constructed fresh per call and fully
/// owned by the caller - there is no shared state between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, duplicate-free, in first-seen order
    columns: Vec<String>,
    /// Data rows, in input order
    rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a sequence of records into a table.
    ///
    /// Each record produces exactly one row. For each field, the
    /// effective column name (display override or intrinsic name) is
    /// appended to the column list the first time it is seen; fields
    /// whose effective name is empty are skipped entirely.
    ///
    /// Records need not share a shape: columns accumulate across all
    /// records' distinct eligible fields, and a row simply omits cells
    /// for columns its record didn't produce.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Record,
    {
        let mut table = Table::new();

        for record in records {
            let mut row = TableRow::new();

            for field in record.fields() {
                let column = match field.spec.effective_name() {
                    Some(name) => name,
                    None => continue,
                };

                if !table.columns.iter().any(|c| c == column) {
                    table.columns.push(column.to_string());
                }

                row.insert(column, field.value);
            }

            table.rows.push(row);
        }

        table
    }

    /// Column names in table order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in input order
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Check if the table has no columns and no rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }
}
