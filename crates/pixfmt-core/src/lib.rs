//! # pixfmt-core
//!
//! Typed model of GPU pixel format description tables.
//!
//! Each table row describes one pixel format: its channels (type, size,
//! normalization), their colorspace role, and how they are packed for both
//! little-endian and big-endian byte orders. This crate parses the table,
//! checks that both byte orders agree, and answers the questions code
//! generators ask about a format (block size, array-ness, depth/stencil,
//! numeric ranges).
//!
//! - [`Channel`], [`ChannelType`] - One scalar component of a block
//! - [`Swizzle`] - Destination slot to source channel mapping
//! - [`Format`], [`Layout`], [`Colorspace`] - One table row
//! - [`FormatTable`] - All rows, in table order
//! - [`FormatError`] - Malformed rows, integrity violations, misuse
//!
//! ## Usage
//!
//! ```rust
//! use pixfmt_core::{parse_str, Colorspace};
//!
//! let table = parse_str("
//! PIPE_FORMAT_Z24_UNORM_S8_UINT, plain, 1, 1, un24, up8, , , xy__, zs, up8, un24, , , yx__
//! ").unwrap();
//!
//! let zs = table.get("PIPE_FORMAT_Z24_UNORM_S8_UINT").unwrap();
//! assert_eq!(zs.colorspace(), Colorspace::Zs);
//! assert!(zs.has_depth() && zs.has_stencil());
//! assert_eq!(zs.le_channels()[0].name, "z");
//! assert_eq!(zs.be_channels()[1].shift, 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize` for the model types
//!
//! ## Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Parse diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod format;
pub mod parse;
pub mod swizzle;
pub mod table;

pub use channel::{Channel, ChannelType, VERY_LARGE};
pub use error::{ErrorKind, FormatError, FormatResult};
pub use format::{ByteOrder, Colorspace, FORMAT_NAME_PREFIX, Format, Layout};
pub use parse::parse_row;
pub use swizzle::{Swizzle, parse_swizzles};
pub use table::{FormatTable, parse_reader, parse_str, read_table};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{Channel, ChannelType};
    pub use crate::error::{ErrorKind, FormatError, FormatResult};
    pub use crate::format::{ByteOrder, Colorspace, Format, Layout};
    pub use crate::swizzle::Swizzle;
    pub use crate::table::{FormatTable, parse_reader, parse_str, read_table};
}
