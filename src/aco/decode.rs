//! ACO structural probe and two-pass body decoder.

use enough::Stop;

use crate::color::{self, Color};
use crate::cursor::{ByteOrder, Cursor};
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Color-space tags an ACO record may carry.
const SPACE_RGB: i16 = 0;
const SPACE_HSV: i16 = 1;
const SPACE_CMYK: i16 = 2;
const SPACE_LAB: i16 = 7;
const SPACE_GRAY: i16 = 8;

/// Probed ACO metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcoHeader {
    /// Color count declared by the protocol-1 block.
    pub color_range: i16,
    /// Whether the trailing protocol-2 block declares any named entries.
    pub named: bool,
}

/// Validate the two-stage protocol structure and probe the color count.
///
/// A valid ACO file opens with protocol version 1 and, after the
/// protocol-1 records, carries a protocol version 2 word. Any mismatch
/// invalidates the whole file.
pub fn parse_header(data: &[u8]) -> Result<AcoHeader, PaletteError> {
    let mut cur = Cursor::new(data, ByteOrder::Big);

    let version = cur.get_i16()?;
    if version != 1 {
        return Err(PaletteError::UnrecognizedFormat);
    }
    let color_range = cur.get_i16()?;
    if color_range < 0 {
        return Err(PaletteError::InvalidHeader(format!(
            "negative ACO color count {color_range}"
        )));
    }

    cur.skip(color_range as usize * 10)?;
    let version = cur.get_i16()?;
    if version != 2 {
        return Err(PaletteError::UnrecognizedFormat);
    }

    let named = match cur.get_i16() {
        Ok(v2_range) => v2_range > 0,
        Err(_) => false,
    };

    Ok(AcoHeader { color_range, named })
}

pub(crate) fn decode_palette(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    parse_header(data)?;

    let mut cur = Cursor::new(data, ByteOrder::Big);
    let (mut colors, mut names) = decode_block(&mut cur, limits, stop)?;

    // A protocol-1 file may carry a trailing protocol-2 block with the
    // same colors plus names; when present it replaces the first pass.
    if cur.remaining() >= 2 {
        let mark = cur.position();
        if cur.get_i16()? == 2 {
            cur.set_position(mark)?;
            (colors, names) = decode_block(&mut cur, limits, stop)?;
        }
    }

    Ok(Palette::with_names(PaletteFormat::Aco, colors, names))
}

/// Decode one protocol block: version word, count word, then `count`
/// 10-byte records (protocol 2 records additionally carry a name).
#[allow(clippy::type_complexity)]
fn decode_block(
    cur: &mut Cursor<'_>,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(Vec<Color>, Vec<Option<String>>), PaletteError> {
    let version = cur.get_i16()?;
    let color_range = cur.get_i16()?;
    if color_range < 0 {
        return Err(PaletteError::InvalidData(format!(
            "negative ACO color count {color_range}"
        )));
    }
    let count = color_range as usize;
    if let Some(limits) = limits {
        limits.check_colors(count)?;
        limits.check_memory(count * size_of::<Color>())?;
    }

    let mut colors = Vec::with_capacity(count);
    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        if i % 64 == 0 {
            stop.check()?;
        }

        let space = cur.get_i16()?;
        let w = cur.get_i16()?;
        let x = cur.get_i16()?;
        let y = cur.get_i16()?;
        let z = cur.get_i16()?;

        // An unrecognized tag leaves the entry at its default value; the
        // record's fixed 10 bytes are consumed either way.
        let color = match space {
            SPACE_RGB => Color::rgb(low_byte(w), low_byte(x), low_byte(y)),
            SPACE_HSV => color::hsv_to_rgb(
                low_byte(w) as f64 / 255.0 * 360.0,
                low_byte(x) as f64 / 255.0,
                low_byte(y) as f64 / 255.0,
            ),
            // CMYK components are stored as inverted 16-bit fractions.
            SPACE_CMYK => color::cmyk_to_rgb(
                (65535 - w as u16 as u32) as f64,
                (65535 - x as u16 as u32) as f64,
                (65535 - y as u16 as u32) as f64,
                (65535 - z as u16 as u32) as f64,
                65535.0,
            ),
            SPACE_LAB => color::lab_to_rgb(w as f64, x as f64, y as f64, 100.0),
            SPACE_GRAY => {
                let v = low_byte(w);
                Color::rgb(v, v, v)
            }
            _ => Color::default(),
        };
        colors.push(color);

        names.push(if version == 2 {
            cur.skip(2)?;
            Some(read_name(cur)?)
        } else {
            None
        });
    }

    Ok((colors, names))
}

/// Read a protocol-2 name: 16-bit code-unit count, then UTF-16 text in
/// the session (big-endian) order, embedded NULs stripped.
fn read_name(cur: &mut Cursor<'_>) -> Result<String, PaletteError> {
    let unit_count = cur.get_i16()?;
    if unit_count < 0 {
        return Err(PaletteError::InvalidData(format!(
            "negative ACO name length {unit_count}"
        )));
    }
    let mut units = Vec::with_capacity(unit_count as usize);
    for _ in 0..unit_count {
        units.push(cur.get_u16()?);
    }
    Ok(String::from_utf16_lossy(&units).replace('\0', ""))
}

#[inline]
fn low_byte(word: i16) -> u8 {
    (word & 0xFF) as u8
}
