//! JASC PAL header probe and body decoder.

use enough::Stop;

use super::MAGIC;
use crate::color::Color;
use crate::cursor::{ByteOrder, Cursor};
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Probed JASC PAL metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JascHeader {
    /// The 2-byte field terminator; low byte first, high byte second in
    /// the file. For the common CRLF-delimited files this is 0x0A0D.
    pub delimiter: u16,
    /// Effective color count: the minimum of the header's hexadecimal
    /// and decimal count fields.
    pub color_range: i16,
}

/// Validate the JASC magic and probe the delimiter and color counts.
pub fn parse_header(data: &[u8]) -> Result<JascHeader, PaletteError> {
    if data.len() < 0x16 {
        return Err(PaletteError::InvalidHeader(
            "JASC PAL data shorter than minimum header".into(),
        ));
    }

    let mut cur = Cursor::new(data, ByteOrder::Little);
    if &cur.read_fixed::<8>()? != MAGIC {
        return Err(PaletteError::UnrecognizedFormat);
    }

    let delimiter = cur.get_u16()?;

    // Two redundant counts: the first field is hexadecimal, the second
    // decimal; the effective count is whichever is smaller.
    let hex_field = read_field(&mut cur, delimiter)?;
    let hex_range = i16::from_str_radix(&hex_field, 16).map_err(|_| {
        PaletteError::InvalidHeader(format!("bad hexadecimal color count {hex_field:?}"))
    })?;
    let dec_field = read_field(&mut cur, delimiter)?;
    let dec_range = dec_field.parse::<i16>().map_err(|_| {
        PaletteError::InvalidHeader(format!("bad decimal color count {dec_field:?}"))
    })?;

    let color_range = hex_range.min(dec_range);
    if color_range < 0 {
        return Err(PaletteError::InvalidHeader(format!(
            "negative JASC PAL color count {color_range}"
        )));
    }

    Ok(JascHeader {
        delimiter,
        color_range,
    })
}

pub(crate) fn decode_palette(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    let header = parse_header(data)?;

    let count = header.color_range as usize;
    if let Some(limits) = limits {
        limits.check_colors(count)?;
        limits.check_memory(count * size_of::<Color>())?;
    }

    let mut cur = Cursor::new(data, ByteOrder::Little);
    cur.set_position(0x15)?;

    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        if i % 64 == 0 {
            stop.check()?;
        }
        let field = read_field(&mut cur, header.delimiter)?;
        colors.push(parse_triple(&field)?);
    }

    Ok(Palette::new(PaletteFormat::JascPal, colors))
}

/// Read a delimiter-terminated text field.
///
/// Accumulates bytes until the last two match the delimiter's (low, high)
/// pair in that order or the input ends, then drops the trailing pair and
/// decodes the rest as ASCII text.
fn read_field(cur: &mut Cursor<'_>, delimiter: u16) -> Result<String, PaletteError> {
    let first = delimiter as u8;
    let second = (delimiter >> 8) as u8;

    let mut buf = Vec::new();
    loop {
        buf.push(cur.read_u8()?);
        if cur.remaining() == 0 {
            break;
        }
        if buf.len() > 1 && buf[buf.len() - 1] == second && buf[buf.len() - 2] == first {
            break;
        }
    }

    if buf.len() < 2 {
        return Err(PaletteError::UnexpectedEof);
    }
    buf.truncate(buf.len() - 2);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse a `"R G B"` field of space-separated decimal byte values.
fn parse_triple(field: &str) -> Result<Color, PaletteError> {
    let mut parts = field.split(' ');
    let mut next = || -> Result<u8, PaletteError> {
        let part = parts
            .next()
            .ok_or_else(|| PaletteError::InvalidData(format!("short color field {field:?}")))?;
        part.parse::<u8>()
            .map_err(|_| PaletteError::InvalidData(format!("bad color component {part:?}")))
    };
    let r = next()?;
    let g = next()?;
    let b = next()?;
    Ok(Color::rgb(r, g, b))
}
