//! Format info command.
//!
//! Displays both byte-order channel layouts and every derived property of a
//! format.

use crate::InfoArgs;
use anyhow::{Result, bail};
use pixfmt_core::{ByteOrder, Channel, ChannelType, Format};
use serde::Serialize;

/// Derived properties of a format, for JSON output.
#[derive(Serialize)]
struct FormatReport<'a> {
    short_name: String,
    #[serde(flatten)]
    format: &'a Format,
    block_size: u32,
    nr_channels: usize,
    stride: f64,
    array_element: Option<&'a Channel>,
    is_mixed: bool,
    is_pot: bool,
    is_int: bool,
    is_float: bool,
    is_bitmask: bool,
    is_pure_color: Option<bool>,
    channel_type: Option<ChannelType>,
    is_pure_signed: Option<bool>,
    is_pure_unsigned: Option<bool>,
    has_depth: bool,
    has_stencil: bool,
    is_compressed: bool,
    is_srgb: bool,
}

impl<'a> FormatReport<'a> {
    fn new(format: &'a Format) -> Self {
        Self {
            short_name: format.short_name(),
            format,
            block_size: format.block_size(),
            nr_channels: format.nr_channels(),
            stride: format.stride(),
            array_element: format.array_element(),
            is_mixed: format.is_mixed(),
            is_pot: format.is_pot(),
            is_int: format.is_int(),
            is_float: format.is_float(),
            is_bitmask: format.is_bitmask(),
            is_pure_color: format.is_pure_color().ok(),
            channel_type: format.channel_type().ok(),
            is_pure_signed: format.is_pure_signed().ok(),
            is_pure_unsigned: format.is_pure_unsigned().ok(),
            has_depth: format.has_depth(),
            has_stencil: format.has_stencil(),
            is_compressed: format.is_compressed(),
            is_srgb: format.is_srgb(),
        }
    }
}

/// Runs the info command for each requested format.
pub fn run(args: InfoArgs) -> Result<()> {
    let table = super::load_table(&args.input)?;

    let mut formats = Vec::with_capacity(args.format.len());
    for name in &args.format {
        match super::find_format(&table, name) {
            Some(f) => formats.push(f),
            None => bail!("No format '{}' in {}", name, args.input.display()),
        }
    }

    if args.json {
        let reports: Vec<FormatReport> = formats.into_iter().map(FormatReport::new).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (idx, fmt) in formats.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_text(fmt);
    }
    Ok(())
}

fn print_text(fmt: &Format) {
    println!("{} ({})", fmt.name(), fmt.short_name());
    println!("  Layout:     {}", fmt.layout());
    println!("  Block:      {}x{}, {} bits", fmt.block_width(), fmt.block_height(), fmt.block_size());
    println!("  Stride:     {} bytes", fmt.stride());
    println!("  Colorspace: {}", fmt.colorspace());

    for (label, order) in [("Little-endian", ByteOrder::Little), ("Big-endian", ByteOrder::Big)] {
        let swizzles: String = fmt.swizzles(order).iter().map(|s| s.to_char()).collect();
        println!("  {label} (swizzle {swizzles}):");
        for (slot, ch) in fmt.channels(order).iter().enumerate() {
            if ch.size == 0 {
                continue;
            }
            println!(
                "    [{slot}] {:<5} {:<6} shift {:>3}  {}",
                ch.to_string(),
                ch.name,
                ch.shift,
                ch.kind
            );
        }
    }

    match fmt.array_element() {
        Some(elem) => println!("  Array:      {} x {}", fmt.nr_channels(), elem),
        None => println!("  Array:      no"),
    }
    println!("  Channels:   {}", fmt.nr_channels());
    println!("  Mixed:      {}", fmt.is_mixed());
    println!("  POT:        {}", fmt.is_pot());
    println!("  Int:        {}", fmt.is_int());
    println!("  Float:      {}", fmt.is_float());
    println!("  Bitmask:    {}", fmt.is_bitmask());
    println!("  Pure color: {}", super::show(fmt.is_pure_color()));
    println!("  Type:       {}", super::show(fmt.channel_type()));
    println!("  Depth:      {}", fmt.has_depth());
    println!("  Stencil:    {}", fmt.has_stencil());
}
