//! Format table validation tests.
//!
//! Parses the fixture table in `tests/data/formats.csv` and checks the
//! invariants every parsed format must satisfy, plus known-answer checks
//! for representative rows.

use approx::assert_relative_eq;
use pixfmt_core::{
    ByteOrder, ChannelType, Colorspace, ErrorKind, FormatError, FormatTable, Layout, Swizzle,
    VERY_LARGE, parse_row, parse_str, read_table,
};
use std::io::Write;

const FIXTURE: &str = include_str!("data/formats.csv");

fn fixture() -> FormatTable {
    parse_str(FIXTURE).expect("fixture table should parse")
}

// ============================================================================
// Table-wide invariants
// ============================================================================

#[test]
fn le_and_be_widths_agree() {
    for fmt in &fixture() {
        let be_bits: u32 = fmt.be_channels().iter().map(|c| c.size).sum();
        assert_eq!(fmt.block_size(), be_bits, "{fmt}");
    }
}

#[test]
fn channel_presence_is_byte_order_independent() {
    for fmt in &fixture() {
        for slot in 0..4 {
            let be_present = !fmt.be_swizzles()[slot].is_none();
            assert_eq!(fmt.has_channel(slot), be_present, "{fmt} slot {slot}");
        }
    }
}

#[test]
fn array_element_matches_block_size() {
    let table = fixture();
    let mut arrays = 0;
    for fmt in &table {
        assert_eq!(fmt.is_array(), fmt.array_element().is_some(), "{fmt}");
        if let Some(elem) = fmt.array_element() {
            arrays += 1;
            assert_eq!(elem.size * fmt.nr_channels() as u32, fmt.block_size(), "{fmt}");
        }
    }
    assert!(arrays > 0);
}

#[test]
fn shifts_tile_the_block() {
    for fmt in &fixture() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut spans: Vec<(u32, u32)> = fmt
                .channels(order)
                .iter()
                .filter(|c| c.size != 0)
                .map(|c| (c.shift, c.size))
                .collect();
            spans.sort();
            let mut next = 0;
            for (shift, size) in spans {
                assert_eq!(shift, next, "{fmt} {order:?}");
                next += size;
            }
            assert_eq!(next, fmt.block_size(), "{fmt} {order:?}");
        }
    }
}

#[test]
fn parse_is_idempotent() {
    assert_eq!(fixture(), fixture());
}

#[test]
fn table_order_is_row_order() {
    let table = fixture();
    assert_eq!(table[0].name(), "PIPE_FORMAT_NONE");
    assert_eq!(table.formats().last().map(|f| f.name()), Some("PIPE_FORMAT_BPTC_RGBA_UNORM"));
    let names: Vec<String> = table.into_vec().into_iter().map(|f| f.name().to_string()).collect();
    let pos = |n: &str| names.iter().position(|x| x == n).expect(n);
    assert!(pos("PIPE_FORMAT_B8G8R8A8_UNORM") < pos("PIPE_FORMAT_Z16_UNORM"));
}

#[test]
fn read_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write failed");
    let table = read_table(file.path()).expect("read failed");
    assert_eq!(table, fixture());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_table(dir.path().join("missing.csv")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

// ============================================================================
// Row shapes
// ============================================================================

#[test]
fn short_row_equals_expanded_row() {
    let short = parse_row("PIPE_FORMAT_R8G8_UNORM, plain, 1, 1, un8, un8, , , xy01, rgb")
        .expect("short row");
    let full = parse_row(
        "PIPE_FORMAT_R8G8_UNORM, plain, 1, 1, un8, un8, , , xy01, rgb, un8, un8, , , xy01",
    )
    .expect("full row");
    assert_eq!(short, full);
    assert_eq!(short.le_channels(), full.le_channels());
    assert_eq!(short.be_swizzles(), full.be_swizzles());
}

#[test]
fn rows_abort_on_first_error() {
    let text = "\
PIPE_FORMAT_R8_UNORM, plain, 1, 1, un8, , , , x001, rgb
PIPE_FORMAT_BAD, plain, 1, 1, un8, , , , x00, rgb
PIPE_FORMAT_R16_UNORM, plain, 1, 1, un16, , , , x001, rgb
";
    let err = parse_str(text).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.kind(), ErrorKind::Malformed);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn rgba8_unorm_is_array() {
    let fmt = parse_row("PIPE_FORMAT_R8G8B8A8_UNORM, plain, 1, 1, un8, un8, un8, un8, xyzw, rgb")
        .expect("row");
    assert_eq!(fmt.layout(), &Layout::Plain);
    assert_eq!(fmt.colorspace(), Colorspace::Rgb);
    assert_eq!(fmt.nr_channels(), 4);
    assert_eq!(fmt.block_size(), 32);
    assert_relative_eq!(fmt.stride(), 4.0);
    assert!(fmt.is_array());
    assert_eq!(fmt.array_element().map(|c| c.size), Some(8));
    assert!(!fmt.is_mixed());
    assert!(fmt.is_bitmask());
    assert!(!fmt.is_pure_color().unwrap());

    let names: Vec<&str> = fmt.le_channels().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["r", "g", "b", "a"]);
}

#[test]
fn be_only_missing_slot_is_rejected() {
    let row = "PIPE_FORMAT_BAD, plain, 1, 1, un8, un8, , , xy01, rgb, un8, un8, , , x_01";
    let err = parse_row(row).unwrap_err();
    assert!(matches!(err, FormatError::SwizzleParity { slot: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Integrity);
}

#[test]
fn zs_naming_and_queries() {
    let fmt = parse_row("PIPE_FORMAT_Z24_UNORM_S8_UINT, plain, 1, 1, un24, up8, , , xy__, zs")
        .expect("row");
    assert_eq!(fmt.le_channels()[0].name, "z");
    assert_eq!(fmt.le_channels()[1].name, "s");
    assert!(fmt.has_depth());
    assert!(fmt.has_stencil());
    assert!(!fmt.has_channel(2));
    assert!(fmt.is_depth_and_stencil());
    assert!(!fmt.is_pure_color().unwrap());
}

#[test]
fn float_range_ignores_size() {
    let table = fixture();
    let sizes = ["PIPE_FORMAT_R16_FLOAT", "PIPE_FORMAT_R32G32B32A32_FLOAT", "PIPE_FORMAT_Z32_FLOAT"];
    for name in sizes {
        let ch = &table.get(name).expect(name).le_channels()[0];
        assert_eq!(ch.kind, ChannelType::Float);
        assert_eq!(ch.max().unwrap(), VERY_LARGE);
        assert_eq!(ch.min().unwrap(), -VERY_LARGE);
    }
}

// ============================================================================
// Known rows
// ============================================================================

#[test]
fn b5g6r5_shifts() {
    let table = fixture();
    let fmt = table.get_short("b5g6r5_unorm").expect("b5g6r5");
    let le: Vec<(&str, u32)> = fmt.le_channels().iter().map(|c| (c.name.as_str(), c.shift)).collect();
    assert_eq!(le[..3], [("b", 0), ("g", 5), ("r", 11)]);
    let be: Vec<(&str, u32)> = fmt.be_channels().iter().map(|c| (c.name.as_str(), c.shift)).collect();
    assert_eq!(be[..3], [("r", 11), ("g", 5), ("b", 0)]);
    assert!(!fmt.is_array());
    assert!(fmt.is_bitmask());
}

#[test]
fn padded_bgrx_is_array() {
    let table = fixture();
    let fmt = table.get("PIPE_FORMAT_B8G8R8X8_UNORM").expect("bgrx");
    assert_eq!(fmt.nr_channels(), 4);
    assert_eq!(fmt.le_channels()[3].kind, ChannelType::Void);
    assert_eq!(fmt.le_channels()[3].name, "x");
    assert_eq!(fmt.le_swizzles()[3], Swizzle::One);
    assert!(fmt.is_array());
}

#[test]
fn luminance_alpha_names() {
    let table = fixture();
    let fmt = table.get("PIPE_FORMAT_L8A8_UNORM").expect("l8a8");
    assert_eq!(fmt.le_channels()[0].name, "rgb");
    assert_eq!(fmt.le_channels()[1].name, "a");
    assert_eq!(fmt.le_swizzle_str(), "xxxy");
    assert_eq!(fmt.be_swizzle_str(), "yyyx");
}

#[test]
fn stencil_only() {
    let table = fixture();
    let fmt = table.get("PIPE_FORMAT_S8_UINT").expect("s8");
    assert_eq!(fmt.le_channels()[0].name, "s");
    assert!(!fmt.has_depth());
    assert!(fmt.has_stencil());
    assert!(fmt.is_depth_or_stencil());
    assert!(!fmt.is_depth_and_stencil());
}

#[test]
fn pure_integer_formats() {
    let table = fixture();
    let uint = table.get("PIPE_FORMAT_R8G8B8A8_UINT").expect("uint");
    assert!(uint.is_pure_color().unwrap());
    assert!(uint.is_pure_unsigned().unwrap());
    assert!(!uint.is_pure_signed().unwrap());
    assert!(uint.is_int());

    let sint = table.get("PIPE_FORMAT_R16G16_SINT").expect("sint");
    assert!(sint.is_pure_signed().unwrap());
    assert_eq!(sint.le_channels()[0].max().unwrap(), 32767);
}

#[test]
fn mixed_and_float() {
    let table = fixture();
    let mixed = table.get("PIPE_FORMAT_R8SG8SB8UX8U_NORM").expect("mixed");
    assert!(mixed.is_mixed());
    assert!(!mixed.is_array());
    assert!(mixed.channel_type().is_err());

    let float = table.get("PIPE_FORMAT_R32G32B32A32_FLOAT").expect("float");
    assert!(float.is_float());
    assert!(!float.is_int());
    assert!(float.is_array());
    assert_relative_eq!(float.stride(), 16.0);
}

#[test]
fn fixed_point_range() {
    let table = fixture();
    let ch = &table.get("PIPE_FORMAT_R32_FIXED").expect("fixed").le_channels()[0];
    assert_eq!(ch.max().unwrap(), 65535);
    assert_eq!(ch.min().unwrap(), -65536);
}

#[test]
fn compressed_layouts() {
    let table = fixture();
    let dxt1 = table.get("PIPE_FORMAT_DXT1_RGB").expect("dxt1");
    assert!(dxt1.is_compressed());
    assert_eq!((dxt1.block_width(), dxt1.block_height()), (4, 4));
    assert_eq!(dxt1.block_size(), 64);
    assert_relative_eq!(dxt1.stride(), 8.0);
    assert!(!dxt1.is_array());
    assert!(!dxt1.is_int());
    assert!(!dxt1.is_pure_color().unwrap());
    let names: Vec<&str> = dxt1.le_channels().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["x", "y", "z", "w"]);

    let srgb = table.get("PIPE_FORMAT_DXT1_SRGB").expect("dxt1 srgb");
    assert!(srgb.is_srgb());

    let uyvy = table.get("PIPE_FORMAT_UYVY").expect("uyvy");
    assert_eq!(uyvy.layout(), &Layout::Subsampled);
    assert!(!uyvy.is_compressed());
    assert_eq!(uyvy.colorspace(), Colorspace::Yuv);
}

#[test]
fn plain_yuv_is_rejected() {
    let err = parse_str("PIPE_FORMAT_BAD, plain, 1, 1, un8, un8, un8, , xyz1, yuv\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainMisuse);
}

#[test]
fn void_range_is_misuse() {
    let table = fixture();
    let fmt = table.get("PIPE_FORMAT_Z24X8_UNORM").expect("z24x8");
    let err = fmt.le_channels()[1].max().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainMisuse);
}
