//! # rowcast
//!
//! Demo binary for rowcastlib: builds two sample records, maps them into a
//! table, and prints the table to stdout as fixed-width text.
//!
//! The `Person` record shows the display-name override in action: its
//! `Name` field is declared to appear under the `FullName` column, while
//! `Age` keeps its intrinsic name. When stdout is a terminal the program
//! waits for a keypress before exiting, so the table stays on screen; with
//! piped output it exits immediately.
//!
//! Takes no arguments, reads no environment, persists nothing.

use std::io;

use anyhow::Result;
use console::Term;
use rowcastlib::output::text::write_table;
use rowcastlib::{Field, FieldSpec, Record, Table};

/// Sample record; `Name` is displayed under the `FullName` column
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

fn main() -> Result<()> {
    let people = [Person::new("Person1", 29), Person::new("Person2", 35)];

    let table = Table::from_records(&people);

    let stdout = io::stdout();
    write_table(&table, &mut stdout.lock())?;

    // Keep the table on screen until a keypress; skipped for piped output
    let term = Term::stdout();
    if term.is_term() {
        term.read_key()?;
    }

    Ok(())
}
