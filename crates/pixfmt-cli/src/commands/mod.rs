//! CLI command implementations

pub mod check;
pub mod info;
pub mod list;

use anyhow::{Context, Result};
use pixfmt_core::{Format, FormatTable};
use std::path::Path;

/// Load a format table from path
pub fn load_table(path: &Path) -> Result<FormatTable> {
    pixfmt_core::read_table(path).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Find a format by full or short name
pub fn find_format<'a>(table: &'a FormatTable, name: &str) -> Option<&'a Format> {
    table
        .get(name)
        .or_else(|| table.get_short(&name.to_lowercase()))
}

/// Render a query that may fail as a display string
pub fn show<T: std::fmt::Display>(value: pixfmt_core::FormatResult<T>) -> String {
    match value {
        Ok(v) => v.to_string(),
        Err(e) => format!("error: {e}"),
    }
}
