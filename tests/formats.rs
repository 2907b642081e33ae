//! Per-format decode tests over synthetic in-memory palette files.

use enough::Unstoppable;
use zenswatch::*;

fn push_u16_be(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

// ── ACT ─────────────────────────────────────────────────────────────

#[test]
fn act_footerless_decodes_len_over_3_colors() {
    // Triples are stored B,G,R.
    let data = [1u8, 2, 3, 4, 5, 6];
    let palette = decode_act(&data, Unstoppable).unwrap();
    assert_eq!(palette.format(), PaletteFormat::Act);
    assert_eq!(palette.colors(), &[Color::rgb(3, 2, 1), Color::rgb(6, 5, 4)]);

    let header = act::parse_header(&data).unwrap();
    assert_eq!(header.color_range, -1);
    assert_eq!(header.alpha_color_index, -1);
    assert_eq!(header.byte_order, ByteOrder::Big);
}

#[test]
fn act_big_endian_footer() {
    let mut data = vec![10u8, 20, 30, 40, 50, 60];
    push_u16_be(&mut data, 2); // color range
    push_u16_be(&mut data, 0); // transparent index

    let header = act::parse_header(&data).unwrap();
    assert_eq!(header.byte_order, ByteOrder::Big);
    assert_eq!(header.color_range, 2);
    assert_eq!(header.alpha_color_index, 0);

    let palette = decode_act(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.get(0), Some(Color::rgb(30, 20, 10)));
}

#[test]
fn act_little_endian_footer_is_detected() {
    let mut data = vec![10u8, 20, 30, 40, 50, 60];
    push_u16_le(&mut data, 2);
    push_u16_le(&mut data, 1);

    let header = act::parse_header(&data).unwrap();
    assert_eq!(header.byte_order, ByteOrder::Little);
    assert_eq!(header.color_range, 2);
    assert_eq!(header.alpha_color_index, 1);

    let palette = decode_act(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 2);
}

#[test]
fn act_inconsistent_footer_falls_back_to_256() {
    // 256 * 3 color bytes plus a footer whose count doesn't match the
    // file length under either byte order.
    let mut data = vec![7u8; 256 * 3];
    push_u16_be(&mut data, 5);
    push_u16_be(&mut data, 0);

    let header = act::parse_header(&data).unwrap();
    assert_eq!(header.color_range, -1);
    assert_eq!(header.alpha_color_index, -1);

    let palette = decode_act(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 256);
}

#[test]
fn act_too_short_for_footer_is_an_error() {
    assert!(decode_act(&[1u8, 2], Unstoppable).is_err());
}

#[test]
fn act_truncated_body_is_an_error() {
    // Valid-looking footer for 100 colors, but no color data.
    let mut data = vec![0u8; 100 * 3 + 4];
    data.truncate(20);
    // 20 % 3 != 0 and the footer check fails -> 256-entry fallback, which
    // the 20-byte body cannot satisfy.
    assert!(matches!(
        decode_act(&data, Unstoppable),
        Err(PaletteError::UnexpectedEof)
    ));
}

// ── ACO ─────────────────────────────────────────────────────────────

fn aco_record(out: &mut Vec<u8>, space: u16, w: u16, x: u16, y: u16, z: u16) {
    for v in [space, w, x, y, z] {
        push_u16_be(out, v);
    }
}

fn aco_name(out: &mut Vec<u8>, name: &str) {
    push_u16_be(out, 0); // reserved
    push_u16_be(out, (name.len() + 1) as u16);
    for unit in name.encode_utf16() {
        push_u16_be(out, unit);
    }
    push_u16_be(out, 0); // NUL terminator, stripped on read
}

#[test]
fn aco_v1_with_v2_block_prefers_named_pass() {
    let mut data = Vec::new();
    // Protocol 1 block with placeholder colors.
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 2);
    aco_record(&mut data, 0, 1, 1, 1, 0);
    aco_record(&mut data, 0, 2, 2, 2, 0);
    // Protocol 2 block with the real colors and names.
    push_u16_be(&mut data, 2);
    push_u16_be(&mut data, 2);
    aco_record(&mut data, 0, 0xFF, 0x00, 0x00, 0);
    aco_name(&mut data, "Red");
    aco_record(&mut data, 0, 0x00, 0xFF, 0x00, 0);
    aco_name(&mut data, "Green");

    let header = aco::parse_header(&data).unwrap();
    assert_eq!(header.color_range, 2);
    assert!(header.named);

    let palette = decode_aco(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.get(0), Some(Color::rgb(255, 0, 0)));
    assert_eq!(palette.get(1), Some(Color::rgb(0, 255, 0)));
    assert_eq!(palette.name(0), Some("Red"));
    assert_eq!(palette.name(1), Some("Green"));
}

#[test]
fn aco_empty_v2_block_overwrites_with_nothing() {
    let mut data = Vec::new();
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 1);
    aco_record(&mut data, 0, 9, 9, 9, 0);
    push_u16_be(&mut data, 2);
    push_u16_be(&mut data, 0);

    let header = aco::parse_header(&data).unwrap();
    assert_eq!(header.color_range, 1);
    assert!(!header.named);

    // The protocol-2 pass replaces the first pass wholesale, even when
    // it declares zero entries.
    let palette = decode_aco(&data, Unstoppable).unwrap();
    assert!(palette.is_empty());
}

#[test]
fn aco_color_space_dispatch() {
    let records: &[(u16, u16, u16, u16, u16)] = &[
        // RGB: low byte of each word.
        (0, 0x1110, 0x2220, 0x3330, 0),
        // HSV: low bytes scaled to [0,360]/[0,1]/[0,1]; s=0 -> gray at v.
        (1, 0x00, 0x00, 0xFF, 0),
        // CMYK stored as inverted 16-bit fractions; all-0xFFFF -> white.
        (2, 0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF),
        // Lab with scale 100: L raw 10000 -> 100 -> white.
        (7, 10000, 0, 0, 0),
        // Grayscale: low byte replicated.
        (8, 0x0180, 0, 0, 0),
    ];

    let mut data = Vec::new();
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 5);
    for &(s, w, x, y, z) in records {
        aco_record(&mut data, s, w, x, y, z);
    }
    push_u16_be(&mut data, 2);
    push_u16_be(&mut data, 5);
    for &(s, w, x, y, z) in records {
        aco_record(&mut data, s, w, x, y, z);
        aco_name(&mut data, "c");
    }

    let palette = decode_aco(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 5);
    assert_eq!(palette.get(0), Some(Color::rgb(0x10, 0x20, 0x30)));
    assert_eq!(palette.get(1), Some(Color::rgb(255, 255, 255)));
    assert_eq!(palette.get(2), Some(Color::rgb(255, 255, 255)));
    assert_eq!(palette.get(3), Some(Color::rgb(255, 255, 255)));
    assert_eq!(palette.get(4), Some(Color::rgb(0x80, 0x80, 0x80)));
}

#[test]
fn aco_unknown_space_tag_leaves_default_and_stays_in_sync() {
    let mut data = Vec::new();
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 2);
    aco_record(&mut data, 3, 1, 2, 3, 4); // unrecognized tag
    aco_record(&mut data, 0, 0xAA, 0xBB, 0xCC, 0);
    push_u16_be(&mut data, 2);
    push_u16_be(&mut data, 2);
    aco_record(&mut data, 3, 1, 2, 3, 4);
    aco_name(&mut data, "x");
    aco_record(&mut data, 0, 0xAA, 0xBB, 0xCC, 0);
    aco_name(&mut data, "y");

    let palette = decode_aco(&data, Unstoppable).unwrap();
    assert_eq!(palette.get(0), Some(Color::default()));
    assert_eq!(palette.get(1), Some(Color::rgb(0xAA, 0xBB, 0xCC)));
}

#[test]
fn aco_rejects_bad_protocol_structure() {
    // Wrong leading version.
    let mut data = Vec::new();
    push_u16_be(&mut data, 3);
    push_u16_be(&mut data, 0);
    assert!(decode_aco(&data, Unstoppable).is_err());

    // Declared count runs past the data.
    let mut data = Vec::new();
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 100);
    assert!(matches!(
        decode_aco(&data, Unstoppable),
        Err(PaletteError::UnexpectedEof)
    ));

    // Protocol-2 marker missing after the protocol-1 block.
    let mut data = Vec::new();
    push_u16_be(&mut data, 1);
    push_u16_be(&mut data, 1);
    aco_record(&mut data, 0, 1, 2, 3, 0);
    push_u16_be(&mut data, 7);
    assert!(matches!(
        decode_aco(&data, Unstoppable),
        Err(PaletteError::UnrecognizedFormat)
    ));
}

// ── ASE ─────────────────────────────────────────────────────────────

fn ase_header(block_count: u32) -> Vec<u8> {
    let mut data = b"ASEF".to_vec();
    data.extend_from_slice(&[0, 1, 0, 0]); // format version, unused
    data.extend_from_slice(&block_count.to_be_bytes());
    data
}

fn ase_group_start(out: &mut Vec<u8>, name: &str) {
    push_u16_be(out, 0xC001);
    out.extend_from_slice(&0u32.to_be_bytes()); // block length, ignored
    push_u16_be(out, name.len() as u16);
    for unit in name.encode_utf16() {
        push_u16_be(out, unit);
    }
}

fn ase_group_end(out: &mut Vec<u8>) {
    push_u16_be(out, 0xC002);
    out.extend_from_slice(&0u32.to_be_bytes());
}

fn ase_color(out: &mut Vec<u8>, name: &str, tag: &[u8; 4], components: &[f32]) {
    push_u16_be(out, 0x0001);
    out.extend_from_slice(&0u32.to_be_bytes());
    push_u16_be(out, name.len() as u16);
    for unit in name.encode_utf16() {
        push_u16_be(out, unit);
    }
    out.extend_from_slice(tag);
    for c in components {
        out.extend_from_slice(&c.to_be_bytes());
    }
    push_u16_be(out, 0); // color mode, unused
}

#[test]
fn ase_groups_only_yields_empty_palette() {
    let mut data = ase_header(2);
    ase_group_start(&mut data, "Swatches");
    ase_group_end(&mut data);

    let palette = decode_ase(&data, Unstoppable).unwrap();
    assert!(palette.is_empty());
    assert_eq!(palette.format(), PaletteFormat::Ase);
}

#[test]
fn ase_color_space_dispatch() {
    let mut data = ase_header(4);
    ase_color(&mut data, "red", b"RGB ", &[1.0, 0.0, 0.0]);
    ase_color(&mut data, "ink", b"CMYK", &[0.2, 0.4, 0.6, 0.1]);
    ase_color(&mut data, "mid", b"Gray", &[0.5]);
    ase_color(&mut data, "lab", b"Lab ", &[0.8, 10.0, -10.0]);

    let palette = decode_ase(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 4);
    assert_eq!(palette.get(0), Some(Color::rgb(255, 0, 0)));
    assert_eq!(
        palette.get(1),
        Some(color::cmyk_to_rgb(
            0.2f32 as f64,
            0.4f32 as f64,
            0.6f32 as f64,
            0.1f32 as f64,
            1.0
        ))
    );
    assert_eq!(palette.get(2), Some(Color::rgb(128, 128, 128)));
    assert_eq!(
        palette.get(3),
        Some(color::lab_to_rgb(
            0.8f32 as f64,
            10.0,
            -10.0,
            1.0
        ))
    );
}

#[test]
fn ase_colors_between_groups() {
    let mut data = ase_header(4);
    ase_group_start(&mut data, "group");
    ase_color(&mut data, "a", b"RGB ", &[0.0, 1.0, 0.0]);
    ase_color(&mut data, "b", b"RGB ", &[0.0, 0.0, 1.0]);
    ase_group_end(&mut data);

    let palette = decode_ase(&data, Unstoppable).unwrap();
    assert_eq!(
        palette.colors(),
        &[Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)]
    );
}

#[test]
fn ase_bad_magic_is_unrecognized() {
    assert!(matches!(
        decode_ase(b"ASEX\0\0\0\0\0\0\0\0", Unstoppable),
        Err(PaletteError::UnrecognizedFormat)
    ));
}

#[test]
fn ase_truncated_block_is_an_error() {
    let mut data = ase_header(2);
    ase_color(&mut data, "only", b"RGB ", &[0.5, 0.5, 0.5]);
    // Second declared block never materializes.
    assert!(matches!(
        decode_ase(&data, Unstoppable),
        Err(PaletteError::UnexpectedEof)
    ));
}

// ── RIFF PAL ────────────────────────────────────────────────────────

fn riff_pal(colors: &[(u8, u8, u8)]) -> Vec<u8> {
    let total = 0x18 + colors.len() * 4;
    let mut data = b"RIFF".to_vec();
    push_u32_le(&mut data, (total - 4) as u32);
    data.extend_from_slice(b"PAL data");
    push_u32_le(&mut data, (colors.len() * 4 + 4) as u32);
    push_u16_le(&mut data, 0x0300); // palVersion
    push_u16_le(&mut data, colors.len() as u16);
    for &(r, g, b) in colors {
        data.extend_from_slice(&[r, g, b, 0]);
    }
    data
}

#[test]
fn riff_pal_decodes_rgb_entries() {
    let data = riff_pal(&[(10, 20, 30), (200, 100, 50)]);
    let header = riff::parse_header(&data).unwrap();
    assert_eq!(header.byte_order, ByteOrder::Little);
    assert_eq!(header.color_range, 2);
    assert_eq!(header.data_length as usize, data.len() - 4);

    let palette = decode_riff_pal(&data, Unstoppable).unwrap();
    assert_eq!(
        palette.colors(),
        &[Color::rgb(10, 20, 30), Color::rgb(200, 100, 50)]
    );
}

#[test]
fn riff_pal_big_endian_header_is_detected() {
    let colors: &[(u8, u8, u8)] = &[(1, 2, 3)];
    let total = 0x18 + 4;
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&((total - 4) as u32).to_be_bytes());
    data.extend_from_slice(b"PAL data");
    data.extend_from_slice(&8u32.to_be_bytes());
    push_u16_be(&mut data, 0x0300);
    push_u16_be(&mut data, 1);
    for &(r, g, b) in colors {
        data.extend_from_slice(&[r, g, b, 0]);
    }

    let header = riff::parse_header(&data).unwrap();
    assert_eq!(header.byte_order, ByteOrder::Big);
    assert_eq!(header.color_range, 1);

    let palette = decode_riff_pal(&data, Unstoppable).unwrap();
    assert_eq!(palette.colors(), &[Color::rgb(1, 2, 3)]);
}

#[test]
fn riff_pal_missing_chunk_name_is_invalid_not_a_panic() {
    let mut data = riff_pal(&[(1, 2, 3)]);
    data[8..16].copy_from_slice(b"WAVEfmt ");
    assert!(matches!(
        decode_riff_pal(&data, Unstoppable),
        Err(PaletteError::InvalidHeader(_))
    ));
    assert!(PaletteInfo::from_bytes(&data).is_err());
}

#[test]
fn riff_pal_too_short_is_an_error() {
    assert!(decode_riff_pal(b"RIFF\0\0\0\0", Unstoppable).is_err());
}

// ── JASC PAL ────────────────────────────────────────────────────────

#[test]
fn jasc_pal_takes_minimum_of_redundant_counts() {
    // Hex count 0x000A = 10, decimal count 8 -> 8 colors. Field widths
    // are chosen so the fixed 0x15 body offset lands on the first color
    // line.
    let mut data = b"JASC-PAL\r\n".to_vec();
    data.extend_from_slice(b"000A\r\n");
    data.extend_from_slice(b"008\r\n");
    assert_eq!(data.len(), 0x15);
    for i in 0..8u8 {
        data.extend_from_slice(format!("{0} {1} {2}\r\n", i, i + 10, i + 20).as_bytes());
    }

    let header = jasc::parse_header(&data).unwrap();
    assert_eq!(header.delimiter, 0x0A0D);
    assert_eq!(header.color_range, 8);

    let palette = decode_jasc_pal(&data, Unstoppable).unwrap();
    assert_eq!(palette.len(), 8);
    assert_eq!(palette.get(0), Some(Color::rgb(0, 10, 20)));
    assert_eq!(palette.get(7), Some(Color::rgb(7, 17, 27)));
}

#[test]
fn jasc_pal_short_count_field_desyncs_body() {
    // The body always starts at 0x15; a narrower count field shifts the
    // color lines off that offset and the first read lands mid-line.
    let mut data = b"JASC-PAL\r\n".to_vec();
    data.extend_from_slice(b"0100\r\n");
    data.extend_from_slice(b"2\r\n");
    data.extend_from_slice(b"10 20 30\r\n");
    data.extend_from_slice(b"40 50 60\r\n");

    assert!(matches!(
        decode_jasc_pal(&data, Unstoppable),
        Err(PaletteError::InvalidData(_))
    ));
}

#[test]
fn jasc_pal_bad_magic_is_unrecognized() {
    let data = b"RIFF-PAL\r\n0100\r\n256\r\n0 0 0\r\n";
    assert!(matches!(
        decode_jasc_pal(data, Unstoppable),
        Err(PaletteError::UnrecognizedFormat)
    ));
}

#[test]
fn jasc_pal_too_short_is_an_error() {
    assert!(decode_jasc_pal(b"JASC-PAL\r\n", Unstoppable).is_err());
}

#[test]
fn jasc_pal_non_numeric_count_is_invalid() {
    let mut data = b"JASC-PAL\r\n".to_vec();
    data.extend_from_slice(b"zzzz\r\n");
    data.extend_from_slice(b"008\r\n");
    data.extend_from_slice(b"0 0 0\r\n");
    assert!(matches!(
        decode_jasc_pal(&data, Unstoppable),
        Err(PaletteError::InvalidHeader(_))
    ));
}

// ── Raw ─────────────────────────────────────────────────────────────

#[test]
fn raw_reads_bgra_and_drops_partial_tail() {
    // Two full B,G,R,A entries plus one stray byte.
    let data = [30u8, 20, 10, 255, 60, 50, 40, 128, 99];
    let palette = decode_raw(&data, Unstoppable).unwrap();
    assert_eq!(
        palette.colors(),
        &[Color::rgba(10, 20, 30, 255), Color::rgba(40, 50, 60, 128)]
    );
}

#[test]
fn raw_empty_input_is_empty_palette() {
    let palette = decode_raw(&[], Unstoppable).unwrap();
    assert!(palette.is_empty());
}

// ── Sniffing and limits ─────────────────────────────────────────────

#[test]
fn sniffing_dispatches_on_magic() {
    let mut ase = ase_header(1);
    ase_color(&mut ase, "c", b"RGB ", &[0.0, 0.0, 0.0]);
    assert_eq!(
        decode(&ase, Unstoppable).unwrap().format(),
        PaletteFormat::Ase
    );

    let riff = riff_pal(&[(5, 6, 7)]);
    assert_eq!(
        decode(&riff, Unstoppable).unwrap().format(),
        PaletteFormat::RiffPal
    );

    let info = PaletteInfo::from_bytes(&riff).unwrap();
    assert_eq!(info.format, PaletteFormat::RiffPal);
    assert_eq!(info.color_count, Some(1));

    let mut jasc = b"JASC-PAL\r\n".to_vec();
    jasc.extend_from_slice(b"000A\r\n");
    jasc.extend_from_slice(b"001\r\n");
    jasc.extend_from_slice(b"1 2 3\r\n");
    assert_eq!(
        decode(&jasc, Unstoppable).unwrap().format(),
        PaletteFormat::JascPal
    );

    let mut aco = Vec::new();
    push_u16_be(&mut aco, 1);
    push_u16_be(&mut aco, 1);
    aco_record(&mut aco, 0, 1, 2, 3, 0);
    push_u16_be(&mut aco, 2);
    push_u16_be(&mut aco, 1);
    aco_record(&mut aco, 0, 1, 2, 3, 0);
    aco_name(&mut aco, "c");
    assert_eq!(
        decode(&aco, Unstoppable).unwrap().format(),
        PaletteFormat::Aco
    );

    assert!(matches!(
        decode(b"\x00\x00\x00\x00garbage", Unstoppable),
        Err(PaletteError::UnrecognizedFormat)
    ));
}

#[test]
fn extension_dispatch() {
    assert_eq!(PaletteFormat::from_extension(".act"), Some(PaletteFormat::Act));
    assert_eq!(PaletteFormat::from_extension("ACO"), Some(PaletteFormat::Aco));
    assert_eq!(PaletteFormat::from_extension(".ase"), Some(PaletteFormat::Ase));
    // .pal is ambiguous between RIFF and JASC; sniffing resolves it.
    assert_eq!(PaletteFormat::from_extension(".pal"), None);
    assert!(SUPPORTED_EXTENSIONS.contains(&".pal"));
}

#[test]
fn limits_cap_declared_counts() {
    let data = riff_pal(&[(1, 1, 1), (2, 2, 2), (3, 3, 3)]);
    let err = DecodeRequest::new(&data)
        .with_limits(Limits {
            max_colors: Some(2),
            ..Limits::default()
        })
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PaletteError::LimitExceeded(_)));

    // The ACT fallback path allocates 256 entries; limits apply there too.
    let mut act_data = vec![7u8; 256 * 3];
    push_u16_be(&mut act_data, 5);
    push_u16_be(&mut act_data, 0);
    let err = DecodeRequest::new(&act_data)
        .with_format(PaletteFormat::Act)
        .with_limits(Limits {
            max_colors: Some(64),
            ..Limits::default()
        })
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PaletteError::LimitExceeded(_)));
}
