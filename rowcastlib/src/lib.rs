//! # rowcastlib
//!
//! Maps sequences of typed records into a generic table (ordered columns,
//! ordered rows) and renders the table as fixed-width text or CSV.
//!
//! ## Overview
//!
//! Instead of runtime reflection, types opt in by implementing [`Record`]:
//! they return their fields in declaration order as static [`FieldSpec`]
//! declarations paired with tagged [`CellValue`]s. A field may carry a
//! display-name override that replaces its intrinsic name as the column
//! name, and an override of `""` opts the field out entirely.
//!
//! Column order is first-seen order across all records, so sequences of
//! mixed shapes accumulate the union of their columns; a row simply has no
//! cell under a column its record didn't produce, and renderers show such
//! cells as empty.
//!
//! ## Features
//!
//! - **Explicit introspection**: a per-type `Record` contract, no
//!   reflection machinery
//! - **Display-name overrides**: declared once per type, resolved at
//!   type-definition time
//! - **Shape tolerance**: mixed record shapes accumulate columns, never
//!   error
//! - **Pure data types**: tables are plain values, serde-ready, no I/O
//!   side effects in mapping
//!
//! ## Example
//!
//! ```rust
//! use rowcastlib::output::text::render_table;
//! use rowcastlib::{Field, FieldSpec, Record, Table};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Record for Person {
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::new(FieldSpec::display_as("Name", "FullName"), self.name.as_str()),
//!             Field::new(FieldSpec::new("Age"), i64::from(self.age)),
//!         ]
//!     }
//! }
//!
//! let people = [
//!     Person { name: "Person1".to_string(), age: 29 },
//!     Person { name: "Person2".to_string(), age: 35 },
//! ];
//!
//! let table = Table::from_records(&people);
//! assert_eq!(table.columns(), vec!["FullName", "Age"]);
//! assert_eq!(table.rows().len(), 2);
//!
//! let text = render_table(&table);
//! assert!(text.starts_with(" FullName"));
//! ```

pub mod error;
pub mod field;
pub mod output;
pub mod record;
pub mod table;
pub mod value;

pub use error::RowcastError;
pub use field::{Field, FieldSpec};
pub use record::Record;
pub use table::{Table, TableRow};
pub use value::CellValue;

/// Result type for rowcastlib operations
pub type Result<T> = std::result::Result<T, RowcastError>;
