//! Row decoding.
//!
//! A row is a comma-separated record of either 15 fields
//!
//! ```text
//! name, layout, bw, bh, le0, le1, le2, le3, le_swz, colorspace, be0, be1, be2, be3, be_swz
//! ```
//!
//! or the 10-field shorthand without the big-endian half, used when the
//! layout is the same in both byte orders.
//!
//! Bit offsets are assigned in two passes. Little-endian puts the first
//! declared channel in the lowest bits; big-endian puts the last declared
//! channel there. Both passes must arrive at the same total width.

use crate::channel::{Channel, ChannelType};
use crate::format::{Colorspace, Format, Layout};
use crate::swizzle::{Swizzle, parse_swizzles};
use crate::{FormatError, FormatResult};
use tracing::{debug, trace};

/// Starts a comment running to the end of the line.
pub const COMMENT_CHAR: char = '#';

/// Separates fields within a row.
pub const FIELD_DELIMITER: char = ',';

/// Field count of a full row.
pub const FULL_FIELDS: usize = 15;

/// Field count of a byte-order-symmetric row.
pub const SHORT_FIELDS: usize = 10;

/// Largest channel size accepted, in bits.
pub const MAX_CHANNEL_BITS: u32 = 1024;

/// Strips a trailing comment and surrounding whitespace.
///
/// Returns `None` for lines with nothing left.
pub fn strip_comment(line: &str) -> Option<&str> {
    let record = match line.find(COMMENT_CHAR) {
        Some(pos) => &line[..pos],
        None => line,
    };
    let record = record.trim();
    (!record.is_empty()).then_some(record)
}

/// Splits a record into trimmed fields, expanding the 10-field shorthand.
pub fn split_fields(record: &str) -> FormatResult<Vec<&str>> {
    let mut fields: Vec<&str> = record.split(FIELD_DELIMITER).map(str::trim).collect();
    match fields.len() {
        FULL_FIELDS => {}
        SHORT_FIELDS => fields.extend_from_within(4..9),
        found => return Err(FormatError::FieldCount { found }),
    }
    Ok(fields)
}

/// Decodes one channel type field such as `un8`, `sp16`, `f32` or `x24`.
///
/// The returned channel has an empty name and zero shift.
pub fn decode_channel(field: &str) -> FormatResult<Channel> {
    let invalid = || FormatError::InvalidChannelType(field.to_string());

    let mut chars = field.chars();
    let Some(code) = chars.next() else {
        return Ok(Channel::void(""));
    };
    let kind = ChannelType::from_code(code).ok_or_else(invalid)?;

    let rest = chars.as_str();
    let (norm, pure, digits) = if let Some(d) = rest.strip_prefix('n') {
        (true, false, d)
    } else if let Some(d) = rest.strip_prefix('p') {
        (false, true, d)
    } else {
        (false, false, rest)
    };

    if kind == ChannelType::Void {
        if norm || pure {
            return Err(invalid());
        }
        if digits.is_empty() {
            return Ok(Channel::void(""));
        }
    }

    let size = parse_uint(digits, "channel size")?;
    if size > MAX_CHANNEL_BITS {
        return Err(FormatError::InvalidNumber {
            what: "channel size",
            value: digits.to_string(),
        });
    }
    if size == 0 && kind != ChannelType::Void {
        return Err(invalid());
    }
    if kind == ChannelType::Fixed && size % 2 != 0 {
        return Err(FormatError::OddFixedSize(size));
    }

    Ok(Channel::new(kind, norm, pure, size, ""))
}

/// Logical channel names for a row.
///
/// Plain rgb/srgb formats name each source channel after the destination
/// slots that read it (`rgba`); plain zs formats do the same over the first
/// two slots with `zs`. A channel nobody reads is `x`. Other layouts use
/// positional names.
pub fn channel_names(
    layout: &Layout,
    colorspace: Colorspace,
    swizzles: &[Swizzle; 4],
) -> FormatResult<[String; 4]> {
    if *layout != Layout::Plain {
        return Ok(["x", "y", "z", "w"].map(String::from));
    }

    let letters = match colorspace {
        Colorspace::Rgb | Colorspace::Srgb => "rgba",
        Colorspace::Zs => "zs",
        Colorspace::Yuv => return Err(FormatError::InvalidColorspace(colorspace.to_string())),
    };

    let mut names: [String; 4] = Default::default();
    for (swizzle, letter) in swizzles.iter().zip(letters.chars()) {
        if let Some(src) = swizzle.source_index() {
            names[src].push(letter);
        }
    }
    for name in names.iter_mut().filter(|n| n.is_empty()) {
        name.push('x');
    }
    Ok(names)
}

/// Decodes four channel fields and names them.
pub fn decode_channels(
    fields: &[&str],
    layout: &Layout,
    colorspace: Colorspace,
    swizzles: &[Swizzle; 4],
) -> FormatResult<[Channel; 4]> {
    let names = channel_names(layout, colorspace, swizzles)?;
    let mut channels: [Channel; 4] = Default::default();
    for ((channel, field), name) in channels.iter_mut().zip(fields).zip(names) {
        *channel = decode_channel(field)?;
        channel.name = name;
    }
    Ok(channels)
}

/// Assigns little-endian shifts: slot 0 at bit 0, upwards. Returns total width.
pub fn assign_le_shifts(channels: &mut [Channel; 4]) -> u32 {
    let mut shift = 0;
    for channel in channels.iter_mut() {
        channel.shift = shift;
        shift += channel.size;
    }
    shift
}

/// Assigns big-endian shifts: slot 3 at bit 0, downwards. Returns total width.
pub fn assign_be_shifts(channels: &mut [Channel; 4]) -> u32 {
    let mut shift = 0;
    for channel in channels.iter_mut().rev() {
        channel.shift = shift;
        shift += channel.size;
    }
    shift
}

/// Decodes one comment-stripped, non-empty record into a [`Format`].
pub fn parse_row(record: &str) -> FormatResult<Format> {
    let fields = split_fields(record)?;

    let name = fields[0].to_string();
    let layout = Layout::from_tag(fields[1]);
    let block_width = parse_uint(fields[2], "block width")?;
    let block_height = parse_uint(fields[3], "block height")?;
    let colorspace = Colorspace::from_tag(fields[9])
        .ok_or_else(|| FormatError::UnknownColorspace(fields[9].to_string()))?;

    let le_swizzles = parse_swizzles(fields[8])?;
    let mut le_channels = decode_channels(&fields[4..8], &layout, colorspace, &le_swizzles)?;

    let be_swizzles = parse_swizzles(fields[14])?;
    let mut be_channels = decode_channels(&fields[10..14], &layout, colorspace, &be_swizzles)?;

    let le_bits = assign_le_shifts(&mut le_channels);
    let be_bits = assign_be_shifts(&mut be_channels);
    for (le, be) in le_channels.iter().zip(&be_channels) {
        trace!(format_name = %name, le = %le.name, le_shift = le.shift, be = %be.name, be_shift = be.shift, "channel shifts");
    }

    if le_bits != be_bits {
        return Err(FormatError::WidthMismatch {
            name,
            le_bits,
            be_bits,
        });
    }
    if let Some(slot) =
        (0..4).find(|&i| le_swizzles[i].is_none() != be_swizzles[i].is_none())
    {
        return Err(FormatError::SwizzleParity { name, slot });
    }

    debug!(format_name = %name, layout = %layout, bits = le_bits, "parsed format");

    Ok(Format::new(
        name,
        layout,
        block_width,
        block_height,
        le_channels,
        le_swizzles,
        be_channels,
        be_swizzles,
        colorspace,
    ))
}

fn parse_uint(value: &str, what: &'static str) -> FormatResult<u32> {
    let invalid = || FormatError::InvalidNumber {
        what,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}
