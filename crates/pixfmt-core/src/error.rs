//! Error types for format table parsing and format queries.
//!
//! Every failure is fatal at the point of detection: the table is a build-time
//! description, so a bad row aborts the whole parse and no partial model is
//! returned.
//!
//! # Categories
//!
//! - **Malformed rows**: [`FieldCount`](FormatError::FieldCount),
//!   [`InvalidChannelType`](FormatError::InvalidChannelType),
//!   [`InvalidSwizzle`](FormatError::InvalidSwizzle),
//!   [`InvalidNumber`](FormatError::InvalidNumber),
//!   [`UnknownColorspace`](FormatError::UnknownColorspace),
//!   [`OddFixedSize`](FormatError::OddFixedSize)
//! - **Integrity violations**: [`WidthMismatch`](FormatError::WidthMismatch),
//!   [`SwizzleParity`](FormatError::SwizzleParity),
//!   [`InconsistentPure`](FormatError::InconsistentPure),
//!   [`InconsistentType`](FormatError::InconsistentType),
//!   [`NoTypedChannels`](FormatError::NoTypedChannels),
//!   [`DuplicateFormat`](FormatError::DuplicateFormat)
//! - **Domain misuse**: [`VoidRange`](FormatError::VoidRange),
//!   [`RangeOverflow`](FormatError::RangeOverflow),
//!   [`InvalidColorspace`](FormatError::InvalidColorspace)
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{parse_str, ErrorKind};
//!
//! let err = parse_str("PIPE_FORMAT_BAD, plain, 1, 1, un8\n").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Malformed);
//! assert_eq!(err.line(), Some(1));
//! ```

use thiserror::Error;

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Broad failure category of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The row does not follow the table grammar.
    Malformed,
    /// The row is well-formed but contradicts itself or the table.
    Integrity,
    /// A query was made that has no meaning for the value it was made on.
    DomainMisuse,
    /// The table could not be read.
    Io,
}

/// Errors that can occur while parsing a format table or querying a format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Row has a field count other than 10 or 15.
    #[error("expected 10 or 15 fields, found {found}")]
    FieldCount {
        /// Number of fields after splitting
        found: usize,
    },

    /// Channel field starts with an unknown type letter or has a bad suffix.
    #[error("invalid channel type field '{0}'")]
    InvalidChannelType(String),

    /// Swizzle field has an unknown character or is not 4 characters long.
    #[error("invalid swizzle field '{0}'")]
    InvalidSwizzle(String),

    /// A numeric field could not be parsed as a non-negative integer.
    #[error("invalid {what} '{value}'")]
    InvalidNumber {
        /// Which field was being parsed
        what: &'static str,
        /// Raw field text
        value: String,
    },

    /// Colorspace tag is not one of rgb, srgb, yuv, zs.
    #[error("unknown colorspace '{0}'")]
    UnknownColorspace(String),

    /// FIXED channel with an odd bit count cannot be split into integer and fraction halves.
    #[error("fixed-point channel must have an even size, found {0}")]
    OddFixedSize(u32),

    /// Little-endian and big-endian descriptions differ in total width.
    #[error("{name}: little-endian width {le_bits} differs from big-endian width {be_bits}")]
    WidthMismatch {
        /// Format name
        name: String,
        /// Sum of little-endian channel sizes
        le_bits: u32,
        /// Sum of big-endian channel sizes
        be_bits: u32,
    },

    /// A slot has a channel in one byte order and none in the other.
    #[error("{name}: swizzle slot {slot} is present in one byte order only")]
    SwizzleParity {
        /// Format name
        name: String,
        /// Destination slot index
        slot: usize,
    },

    /// Non-void channels disagree on purity.
    #[error("{0}: channels disagree on pure")]
    InconsistentPure(String),

    /// Non-void channels disagree on type.
    #[error("{0}: channels disagree on type")]
    InconsistentType(String),

    /// A uniform-value query was made on a format with only void channels.
    #[error("{0}: format has no typed channels")]
    NoTypedChannels(String),

    /// The same format name appears on two rows.
    #[error("duplicate format '{0}'")]
    DuplicateFormat(String),

    /// Range query on a void channel.
    #[error("void channel has no numeric range")]
    VoidRange,

    /// Range of the channel does not fit the query result type.
    #[error("{size}-bit channel range is not representable")]
    RangeOverflow {
        /// Channel size in bits
        size: u32,
    },

    /// Colorspace has no channel naming rule for plain layouts.
    #[error("colorspace '{0}' cannot name plain channels")]
    InvalidColorspace(String),

    /// Error attributed to a table row.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number
        line: usize,
        /// Underlying error
        #[source]
        source: Box<FormatError>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    /// Wraps this error with the line number of the row it came from.
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// Line number of the offending row, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Category of this error, looking through line attribution.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FieldCount { .. }
            | Self::InvalidChannelType(_)
            | Self::InvalidSwizzle(_)
            | Self::InvalidNumber { .. }
            | Self::UnknownColorspace(_)
            | Self::OddFixedSize(_) => ErrorKind::Malformed,
            Self::WidthMismatch { .. }
            | Self::SwizzleParity { .. }
            | Self::InconsistentPure(_)
            | Self::InconsistentType(_)
            | Self::NoTypedChannels(_)
            | Self::DuplicateFormat(_) => ErrorKind::Integrity,
            Self::VoidRange | Self::RangeOverflow { .. } | Self::InvalidColorspace(_) => {
                ErrorKind::DomainMisuse
            }
            Self::AtLine { source, .. } => source.kind(),
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
