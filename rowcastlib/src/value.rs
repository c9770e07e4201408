//! Tagged cell values and their string conversion rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value in a table row.
///
/// Cells carry a tag instead of a pre-rendered string, so each tag gets
/// one explicit conversion rule in [`CellValue::render`] rather than
/// relying on implicit stringification at insertion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent/null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Str(String),
}

impl CellValue {
    /// Render this value as display text.
    ///
    /// `Null` renders as the empty string, not a literal marker.
    pub fn render(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Str(v) => v.clone(),
        }
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    /// Respects width and alignment from the formatter, so cells can be
    /// padded directly with `{:<20}`-style directives.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Str(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Str(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
