//! Format descriptions and derived properties.
//!
//! A [`Format`] is one row of the table: four channels and four swizzles for
//! each byte order, plus the block footprint and colorspace. All derived
//! queries look at the little-endian description; the big-endian one is an
//! alternate bit placement of the same logical channels.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::parse_str;
//!
//! let table = parse_str(
//!     "PIPE_FORMAT_R8G8B8A8_UNORM, plain, 1, 1, un8, un8, un8, un8, xyzw, rgb\n",
//! ).unwrap();
//! let fmt = &table[0];
//! assert_eq!(fmt.short_name(), "r8g8b8a8_unorm");
//! assert_eq!(fmt.block_size(), 32);
//! assert!(fmt.is_array());
//! ```

use crate::channel::{Channel, ChannelType};
use crate::swizzle::{Swizzle, swizzle_string};
use crate::{FormatError, FormatResult};

/// Prefix stripped by [`Format::short_name`].
pub const FORMAT_NAME_PREFIX: &str = "PIPE_FORMAT_";

/// Memory layout of a block.
///
/// Only [`Layout::Plain`] has semantics here; every other layout is an
/// opaque tag carried through to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Layout {
    /// Channels packed into one block per pixel.
    #[default]
    Plain,
    /// Chroma-subsampled (e.g. UYVY).
    Subsampled,
    /// S3TC / DXTn compression.
    S3tc,
    /// RGTC compression.
    Rgtc,
    /// ETC compression.
    Etc,
    /// BPTC compression.
    Bptc,
    /// ASTC compression.
    Astc,
    /// Anything that fits no other category.
    Other,
    /// Unrecognised tag, kept verbatim.
    Opaque(String),
}

impl Layout {
    /// Decodes a layout tag. Unknown tags become [`Layout::Opaque`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "plain" => Self::Plain,
            "subsampled" => Self::Subsampled,
            "s3tc" => Self::S3tc,
            "rgtc" => Self::Rgtc,
            "etc" => Self::Etc,
            "bptc" => Self::Bptc,
            "astc" => Self::Astc,
            "other" => Self::Other,
            _ => Self::Opaque(tag.to_string()),
        }
    }

    /// Table tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain => "plain",
            Self::Subsampled => "subsampled",
            Self::S3tc => "s3tc",
            Self::Rgtc => "rgtc",
            Self::Etc => "etc",
            Self::Bptc => "bptc",
            Self::Astc => "astc",
            Self::Other => "other",
            Self::Opaque(tag) => tag,
        }
    }

    /// Whether this is a block-compression layout.
    pub fn is_compressed(&self) -> bool {
        matches!(
            self,
            Self::S3tc | Self::Rgtc | Self::Etc | Self::Bptc | Self::Astc
        )
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic role of the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Colorspace {
    /// Linear color.
    #[default]
    Rgb,
    /// sRGB-encoded color.
    Srgb,
    /// Luma/chroma.
    Yuv,
    /// Depth/stencil.
    Zs,
}

impl Colorspace {
    /// Decodes a colorspace tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rgb" => Some(Self::Rgb),
            "srgb" => Some(Self::Srgb),
            "yuv" => Some(Self::Yuv),
            "zs" => Some(Self::Zs),
            _ => None,
        }
    }

    /// Table tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Srgb => "srgb",
            Self::Yuv => "yuv",
            Self::Zs => "zs",
        }
    }
}

impl std::fmt::Display for Colorspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte order of a channel description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// First declared channel in the lowest bits.
    Little,
    /// Last declared channel in the lowest bits.
    Big,
}

/// One pixel format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Format {
    name: String,
    layout: Layout,
    block_width: u32,
    block_height: u32,
    le_channels: [Channel; 4],
    le_swizzles: [Swizzle; 4],
    be_channels: [Channel; 4],
    be_swizzles: [Swizzle; 4],
    colorspace: Colorspace,
}

impl Format {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: String,
        layout: Layout,
        block_width: u32,
        block_height: u32,
        le_channels: [Channel; 4],
        le_swizzles: [Swizzle; 4],
        be_channels: [Channel; 4],
        be_swizzles: [Swizzle; 4],
        colorspace: Colorspace,
    ) -> Self {
        Self {
            name,
            layout,
            block_width,
            block_height,
            le_channels,
            le_swizzles,
            be_channels,
            be_swizzles,
            colorspace,
        }
    }

    /// Full format name, e.g. `PIPE_FORMAT_R8G8B8A8_UNORM`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the `PIPE_FORMAT_` prefix, lower-cased.
    ///
    /// Suitable as an identifier fragment in generated code.
    pub fn short_name(&self) -> String {
        self.name
            .strip_prefix(FORMAT_NAME_PREFIX)
            .unwrap_or(&self.name)
            .to_lowercase()
    }

    /// Block layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Block width in pixels.
    pub fn block_width(&self) -> u32 {
        self.block_width
    }

    /// Block height in pixels.
    pub fn block_height(&self) -> u32 {
        self.block_height
    }

    /// Colorspace.
    pub fn colorspace(&self) -> Colorspace {
        self.colorspace
    }

    /// Little-endian channels in declared order.
    pub fn le_channels(&self) -> &[Channel; 4] {
        &self.le_channels
    }

    /// Big-endian channels in declared order.
    pub fn be_channels(&self) -> &[Channel; 4] {
        &self.be_channels
    }

    /// Little-endian swizzles.
    pub fn le_swizzles(&self) -> &[Swizzle; 4] {
        &self.le_swizzles
    }

    /// Big-endian swizzles.
    pub fn be_swizzles(&self) -> &[Swizzle; 4] {
        &self.be_swizzles
    }

    /// Channels for the given byte order.
    pub fn channels(&self, order: ByteOrder) -> &[Channel; 4] {
        match order {
            ByteOrder::Little => &self.le_channels,
            ByteOrder::Big => &self.be_channels,
        }
    }

    /// Swizzles for the given byte order.
    pub fn swizzles(&self, order: ByteOrder) -> &[Swizzle; 4] {
        match order {
            ByteOrder::Little => &self.le_swizzles,
            ByteOrder::Big => &self.be_swizzles,
        }
    }

    /// Little-endian swizzles as a table field.
    pub fn le_swizzle_str(&self) -> String {
        swizzle_string(&self.le_swizzles)
    }

    /// Big-endian swizzles as a table field.
    pub fn be_swizzle_str(&self) -> String {
        swizzle_string(&self.be_swizzles)
    }

    /// Whether the layout is plain.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.layout == Layout::Plain
    }

    /// Bits per block.
    pub fn block_size(&self) -> u32 {
        self.le_channels.iter().map(|c| c.size).sum()
    }

    /// Alias for [`Format::block_size`].
    #[inline]
    pub fn block_bits(&self) -> u32 {
        self.block_size()
    }

    /// Number of channels with a non-zero size, padding included.
    pub fn nr_channels(&self) -> usize {
        self.le_channels.iter().filter(|c| c.size != 0).count()
    }

    fn first_typed(&self) -> Option<&Channel> {
        self.le_channels.iter().find(|c| !c.is_void())
    }

    /// Shared element channel if the block is a uniform byte-aligned array.
    ///
    /// Every sized channel (padding included) must have the element's size,
    /// which must be a whole number of bytes, and every typed channel must
    /// share its type, normalization and purity.
    pub fn array_element(&self) -> Option<&Channel> {
        if !self.is_plain() {
            return None;
        }
        let reference = self.first_typed()?;
        if reference.size == 0 || reference.size % 8 != 0 {
            return None;
        }
        for channel in &self.le_channels {
            if channel.size != 0 && channel.size != reference.size {
                return None;
            }
            if !channel.is_void() && !channel.same_kind(reference) {
                return None;
            }
        }
        Some(reference)
    }

    /// Whether [`Format::array_element`] is present.
    pub fn is_array(&self) -> bool {
        self.array_element().is_some()
    }

    /// Whether typed channels differ in type, normalization or purity.
    pub fn is_mixed(&self) -> bool {
        if !self.is_plain() {
            return false;
        }
        let Some(reference) = self.first_typed() else {
            return false;
        };
        self.le_channels
            .iter()
            .any(|c| !c.is_void() && !c.same_kind(reference))
    }

    /// Whether the block size is a power of two.
    pub fn is_pot(&self) -> bool {
        self.block_size().is_power_of_two()
    }

    /// Plain and only void, unsigned or signed channels.
    pub fn is_int(&self) -> bool {
        self.is_plain() && self.le_channels.iter().all(|c| c.kind.is_integer_or_void())
    }

    /// Plain and only void or float channels.
    pub fn is_float(&self) -> bool {
        self.is_plain()
            && self
                .le_channels
                .iter()
                .all(|c| matches!(c.kind, ChannelType::Void | ChannelType::Float))
    }

    /// Plain integer format whose block fits an 8, 16 or 32 bit word.
    pub fn is_bitmask(&self) -> bool {
        matches!(self.block_size(), 8 | 16 | 32) && self.is_int()
    }

    /// Whether a plain color format holds raw integer values.
    ///
    /// # Errors
    ///
    /// [`FormatError::InconsistentPure`] if typed channels disagree, and
    /// [`FormatError::NoTypedChannels`] if there are none.
    pub fn is_pure_color(&self) -> FormatResult<bool> {
        if !self.is_plain() || self.colorspace == Colorspace::Zs {
            return Ok(false);
        }
        self.uniform(|c| c.pure, || FormatError::InconsistentPure(self.name.clone()))
    }

    /// Type shared by every typed channel.
    ///
    /// # Errors
    ///
    /// [`FormatError::InconsistentType`] if typed channels disagree, and
    /// [`FormatError::NoTypedChannels`] if there are none.
    pub fn channel_type(&self) -> FormatResult<ChannelType> {
        self.uniform(|c| c.kind, || FormatError::InconsistentType(self.name.clone()))
    }

    /// Pure color with signed channels.
    pub fn is_pure_signed(&self) -> FormatResult<bool> {
        Ok(self.is_pure_color()? && self.channel_type()? == ChannelType::Signed)
    }

    /// Pure color with unsigned channels.
    pub fn is_pure_unsigned(&self) -> FormatResult<bool> {
        Ok(self.is_pure_color()? && self.channel_type()? == ChannelType::Unsigned)
    }

    fn uniform<T: PartialEq>(
        &self,
        value: impl Fn(&Channel) -> T,
        mismatch: impl FnOnce() -> FormatError,
    ) -> FormatResult<T> {
        let mut typed = self.le_channels.iter().filter(|c| !c.is_void()).map(value);
        let first = typed
            .next()
            .ok_or_else(|| FormatError::NoTypedChannels(self.name.clone()))?;
        if typed.any(|v| v != first) {
            return Err(mismatch());
        }
        Ok(first)
    }

    /// Whether destination slot `slot` has a channel. Out-of-range slots have none.
    pub fn has_channel(&self, slot: usize) -> bool {
        self.le_swizzles.get(slot).is_some_and(|s| !s.is_none())
    }

    /// Depth/stencil format with a depth channel.
    pub fn has_depth(&self) -> bool {
        self.colorspace == Colorspace::Zs && self.has_channel(0)
    }

    /// Depth/stencil format with a stencil channel.
    pub fn has_stencil(&self) -> bool {
        self.colorspace == Colorspace::Zs && self.has_channel(1)
    }

    /// Has depth or stencil.
    pub fn is_depth_or_stencil(&self) -> bool {
        self.has_depth() || self.has_stencil()
    }

    /// Has both depth and stencil.
    pub fn is_depth_and_stencil(&self) -> bool {
        self.has_depth() && self.has_stencil()
    }

    /// sRGB colorspace.
    pub fn is_srgb(&self) -> bool {
        self.colorspace == Colorspace::Srgb
    }

    /// Block-compressed layout.
    pub fn is_compressed(&self) -> bool {
        self.layout.is_compressed()
    }

    /// Bytes per block. Fractional for sub-byte blocks.
    pub fn stride(&self) -> f64 {
        f64::from(self.block_size()) / 8.0
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
