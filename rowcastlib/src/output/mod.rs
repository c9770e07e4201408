//! Output rendering: present tables as text.
//!
//! This module handles the final stage of the pipeline - serializing a
//! mapped `Table` for display. It provides:
//!
//! - **text**: fixed-width, left-justified columns with single-space
//!   padding on each side
//! - **csv**: quoted comma-separated values
//!
//! Renderers are pure presentation: they format cells into strings and
//! never reorder, filter, or otherwise recompute table data.

pub mod csv;
pub mod text;

pub use csv::render_csv;
pub use text::{render_table, write_table, TextOptions, FIELD_WIDTH};
