//! Swizzle codes.
//!
//! A swizzle field is four characters over `xyzw01_`. Character `i` says
//! where destination slot `i` gets its value: one of the four source
//! channels, a constant, or nothing.

use crate::{FormatError, FormatResult};

/// Source of one destination slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Swizzle {
    /// Source channel 0.
    X,
    /// Source channel 1.
    Y,
    /// Source channel 2.
    Z,
    /// Source channel 3.
    W,
    /// Constant zero.
    Zero,
    /// Constant one.
    One,
    /// No channel.
    None,
}

impl Swizzle {
    /// Decodes one swizzle character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            'w' => Some(Self::W),
            '0' => Some(Self::Zero),
            '1' => Some(Self::One),
            '_' => Some(Self::None),
            _ => None,
        }
    }

    /// Table character.
    pub const fn to_char(&self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::W => 'w',
            Self::Zero => '0',
            Self::One => '1',
            Self::None => '_',
        }
    }

    /// Index of the source channel, if this selects one.
    pub const fn source_index(&self) -> Option<usize> {
        match self {
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
            Self::W => Some(3),
            Self::Zero | Self::One | Self::None => None,
        }
    }

    /// Whether this slot has no channel.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for Swizzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Decodes a 4-character swizzle field.
pub fn parse_swizzles(field: &str) -> FormatResult<[Swizzle; 4]> {
    let mut out = [Swizzle::None; 4];
    let mut chars = field.chars();
    for slot in out.iter_mut() {
        *slot = chars
            .next()
            .and_then(Swizzle::from_char)
            .ok_or_else(|| FormatError::InvalidSwizzle(field.to_string()))?;
    }
    if chars.next().is_some() {
        return Err(FormatError::InvalidSwizzle(field.to_string()));
    }
    Ok(out)
}

/// Renders swizzles back into the 4-character table form.
pub fn swizzle_string(swizzles: &[Swizzle; 4]) -> String {
    swizzles.iter().map(Swizzle::to_char).collect()
}
