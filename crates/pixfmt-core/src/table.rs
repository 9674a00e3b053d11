//! Format tables.
//!
//! A table is a line-oriented text file with one format per row. Lines may
//! carry `#` comments; blank and comment-only lines are skipped.
//!
//! ```text
//! # name                , layout, bw, bh, channels...         , swizzle, colorspace
//! PIPE_FORMAT_B5G6R5_UNORM, plain, 1, 1, un5, un6, un5,      , zyx1, rgb, un5, un6, un5, , xyz1
//! PIPE_FORMAT_Z16_UNORM   , plain, 1, 1, un16,    ,    ,      , x___, zs
//! ```
//!
//! Parsing stops at the first bad row; the error carries its line number.
//!
//! # Example
//!
//! ```rust,no_run
//! use pixfmt_core::read_table;
//!
//! let table = read_table("u_format.csv").unwrap();
//! for fmt in &table {
//!     println!("{} {} bits", fmt.short_name(), fmt.block_size());
//! }
//! ```

use crate::format::Format;
use crate::parse::{parse_row, strip_comment};
use crate::{FormatError, FormatResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ordered collection of formats, one per table row.
///
/// Iteration order is table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatTable {
    formats: Vec<Format>,
    by_name: HashMap<String, usize>,
}

impl FormatTable {
    /// Number of formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Whether the table has no formats.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Formats in table order.
    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    /// Iterates formats in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Format> {
        self.formats.iter()
    }

    /// Looks up a format by its full name.
    pub fn get(&self, name: &str) -> Option<&Format> {
        self.by_name.get(name).map(|&i| &self.formats[i])
    }

    /// Looks up a format by its [short name](Format::short_name).
    pub fn get_short(&self, short_name: &str) -> Option<&Format> {
        self.formats.iter().find(|f| f.short_name() == short_name)
    }

    /// Consumes the table, returning formats in table order.
    pub fn into_vec(self) -> Vec<Format> {
        self.formats
    }

    fn push(&mut self, format: Format) -> FormatResult<()> {
        if self.by_name.contains_key(format.name()) {
            return Err(FormatError::DuplicateFormat(format.name().to_string()));
        }
        self.by_name.insert(format.name().to_string(), self.formats.len());
        self.formats.push(format);
        Ok(())
    }
}

impl std::ops::Index<usize> for FormatTable {
    type Output = Format;

    fn index(&self, index: usize) -> &Format {
        &self.formats[index]
    }
}

impl IntoIterator for FormatTable {
    type Item = Format;
    type IntoIter = std::vec::IntoIter<Format>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormatTable {
    type Item = &'a Format;
    type IntoIter = std::slice::Iter<'a, Format>;

    fn into_iter(self) -> Self::IntoIter {
        self.formats.iter()
    }
}

/// Reads a format table from a file.
pub fn read_table<P: AsRef<Path>>(path: P) -> FormatResult<FormatTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading format table");
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parses a format table from a string.
pub fn parse_str(text: &str) -> FormatResult<FormatTable> {
    parse_reader(text.as_bytes())
}

/// Parses a format table from a reader.
pub fn parse_reader<R: BufRead>(reader: R) -> FormatResult<FormatTable> {
    let mut table = FormatTable::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(record) = strip_comment(&line) else {
            continue;
        };
        parse_row(record)
            .and_then(|format| table.push(format))
            .map_err(|e| e.at_line(idx + 1))?;
    }

    debug!(formats = table.len(), "parsed format table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const TABLE: &str = "
# comment line
PIPE_FORMAT_R8_UNORM, plain, 1, 1, un8, , , , x001, rgb   # trailing comment

PIPE_FORMAT_R8G8_UNORM, plain, 1, 1, un8, un8, , , xy01, rgb, un8, un8, , , yx01
";

    #[test]
    fn parse_keeps_order() {
        let table = parse_str(TABLE).expect("parse failed");
        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.iter().map(Format::name).collect();
        assert_eq!(names, ["PIPE_FORMAT_R8_UNORM", "PIPE_FORMAT_R8G8_UNORM"]);
    }

    #[test]
    fn lookup() {
        let table = parse_str(TABLE).expect("parse failed");
        assert_eq!(table.get("PIPE_FORMAT_R8G8_UNORM").map(Format::block_size), Some(16));
        assert_eq!(table.get_short("r8_unorm").map(Format::block_size), Some(8));
        assert!(table.get("PIPE_FORMAT_R16_UNORM").is_none());
    }

    #[test]
    fn empty_input() {
        let table = parse_str("\n  # nothing here\n").expect("parse failed");
        assert!(table.is_empty());
    }

    #[test]
    fn error_reports_line() {
        let text = format!("{TABLE}PIPE_FORMAT_BAD, plain, 1, 1\n");
        let err = parse_str(&text).unwrap_err();
        assert_eq!(err.line(), Some(6));
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn duplicate_names_rejected() {
        let text = format!("{TABLE}PIPE_FORMAT_R8_UNORM, plain, 1, 1, un8, , , , x001, rgb\n");
        let err = parse_str(&text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
        assert!(matches!(
            err,
            FormatError::AtLine { ref source, .. } if matches!(**source, FormatError::DuplicateFormat(_))
        ));
    }
}
