//! Channel descriptors.
//!
//! A [`Channel`] describes one scalar component of a packed block: its
//! numeric interpretation, bit size, logical name and bit offset.
//!
//! # Table Grammar
//!
//! ```text
//! ""   / "x"   void, 0 bits
//! x24           void padding, 24 bits
//! un8           unsigned normalized, 8 bits
//! sp16          signed pure integer, 16 bits
//! h32           16.16 fixed point
//! f32           float
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{Channel, ChannelType};
//!
//! let ch = Channel::new(ChannelType::Unsigned, true, false, 8, "r");
//! assert_eq!(ch.to_string(), "un8");
//! assert_eq!(ch.max().unwrap(), 1);
//! assert_eq!(ch.min().unwrap(), 0);
//! ```

use crate::{FormatError, FormatResult};

/// Magnitude returned by [`Channel::max`] / [`Channel::min`] for float channels.
///
/// A stand-in for "effectively unbounded", not the largest value of any
/// particular float type.
pub const VERY_LARGE: i128 = 99_999_999_999_999_999_999_999;

/// Numeric interpretation of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChannelType {
    /// Padding or absent channel.
    #[default]
    Void,
    /// Unsigned integer.
    Unsigned,
    /// Two's complement signed integer.
    Signed,
    /// Signed fixed point, size split evenly between integer and fraction.
    Fixed,
    /// IEEE float.
    Float,
}

impl ChannelType {
    /// Decodes a table type letter.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::Void),
            'u' => Some(Self::Unsigned),
            's' => Some(Self::Signed),
            'h' => Some(Self::Fixed),
            'f' => Some(Self::Float),
            _ => None,
        }
    }

    /// Table type letter.
    pub const fn code(&self) -> char {
        match self {
            Self::Void => 'x',
            Self::Unsigned => 'u',
            Self::Signed => 's',
            Self::Fixed => 'h',
            Self::Float => 'f',
        }
    }

    /// Whether values of this type carry a sign.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Signed | Self::Fixed | Self::Float)
    }

    /// Whether this type is void, unsigned or signed.
    #[inline]
    pub const fn is_integer_or_void(&self) -> bool {
        matches!(self, Self::Void | Self::Unsigned | Self::Signed)
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Void => "void",
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Fixed => "fixed",
            Self::Float => "float",
        };
        f.write_str(s)
    }
}

/// One scalar component of a packed block.
///
/// Equality compares `kind`, `norm`, `pure` and `size` only. The logical
/// `name` and the bit `shift` depend on where the channel sits in a format
/// and are not part of its identity.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Channel {
    /// Numeric interpretation.
    pub kind: ChannelType,
    /// Normalized to [0, 1] or [-1, 1].
    pub norm: bool,
    /// Raw integer domain, no normalization.
    pub pure: bool,
    /// Size in bits.
    pub size: u32,
    /// Logical name ("r", "g", "rgb", "z", "s", "x", ...).
    pub name: String,
    /// Bit offset within the block. Assigned by the parser.
    pub shift: u32,
}

impl Channel {
    /// Creates a channel with a zero shift.
    pub fn new(kind: ChannelType, norm: bool, pure: bool, size: u32, name: impl Into<String>) -> Self {
        Self {
            kind,
            norm,
            pure,
            size,
            name: name.into(),
            shift: 0,
        }
    }

    /// Size-0 void channel.
    pub fn void(name: impl Into<String>) -> Self {
        Self::new(ChannelType::Void, false, false, 0, name)
    }

    /// Whether values carry a sign (signed, fixed and float channels).
    #[inline]
    pub fn sign(&self) -> bool {
        self.kind.is_signed()
    }

    /// Whether this is a void (padding or absent) channel.
    #[inline]
    pub fn is_void(&self) -> bool {
        self.kind == ChannelType::Void
    }

    /// Same type, normalization and purity, ignoring size.
    #[inline]
    pub fn same_kind(&self, other: &Channel) -> bool {
        self.kind == other.kind && self.norm == other.norm && self.pure == other.pure
    }

    /// Maximum representable value.
    ///
    /// # Errors
    ///
    /// [`FormatError::VoidRange`] for void channels,
    /// [`FormatError::OddFixedSize`] for fixed channels of odd size and
    /// [`FormatError::RangeOverflow`] for integers wider than 64 bits.
    pub fn max(&self) -> FormatResult<i128> {
        match self.kind {
            ChannelType::Void => Err(FormatError::VoidRange),
            ChannelType::Float => Ok(VERY_LARGE),
            ChannelType::Fixed => Ok(self.pow2(self.fixed_bits()?)? - 1),
            _ if self.norm => Ok(1),
            ChannelType::Unsigned => Ok(self.pow2(self.size)? - 1),
            ChannelType::Signed => Ok(self.pow2(self.magnitude_bits()?)? - 1),
        }
    }

    /// Minimum representable value.
    ///
    /// # Errors
    ///
    /// Same as [`Channel::max`].
    pub fn min(&self) -> FormatResult<i128> {
        match self.kind {
            ChannelType::Void => Err(FormatError::VoidRange),
            ChannelType::Float => Ok(-VERY_LARGE),
            ChannelType::Fixed => Ok(-self.pow2(self.fixed_bits()?)?),
            ChannelType::Unsigned => Ok(0),
            _ if self.norm => Ok(-1),
            ChannelType::Signed => Ok(-self.pow2(self.magnitude_bits()?)?),
        }
    }

    fn fixed_bits(&self) -> FormatResult<u32> {
        if self.size % 2 != 0 {
            return Err(FormatError::OddFixedSize(self.size));
        }
        Ok(self.size / 2)
    }

    fn magnitude_bits(&self) -> FormatResult<u32> {
        self.size
            .checked_sub(1)
            .ok_or(FormatError::RangeOverflow { size: self.size })
    }

    fn pow2(&self, bits: u32) -> FormatResult<i128> {
        if bits > 64 {
            return Err(FormatError::RangeOverflow { size: self.size });
        }
        Ok(1i128 << bits)
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.same_kind(other) && self.size == other.size
    }
}

impl Eq for Channel {}

impl std::fmt::Display for Channel {
    /// Renders the channel in table grammar.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_void() && self.size == 0 {
            return Ok(());
        }
        write!(f, "{}", self.kind.code())?;
        if self.norm {
            f.write_str("n")?;
        }
        if self.pure {
            f.write_str("p")?;
        }
        write!(f, "{}", self.size)
    }
}
