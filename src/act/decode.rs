//! ACT header probe and body decoder.

use enough::Stop;

use crate::color::Color;
use crate::cursor::{ByteOrder, Cursor};
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Probed ACT footer metadata.
///
/// `color_range` and `alpha_color_index` are −1 when the file has no
/// footer or the footer failed its length consistency check; the body
/// decoder then falls back to `length / 3` or 256 entries respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActHeader {
    /// Byte order the footer integers were read in. ACT's nominal order
    /// is big-endian; little-endian is inferred from the footer position
    /// heuristic.
    pub byte_order: ByteOrder,
    pub color_range: i16,
    pub alpha_color_index: i16,
}

/// Probe the ACT footer without decoding the color table.
///
/// A length that is a multiple of 3 cannot carry the 4-byte footer, so
/// such files return sentinel fields immediately and the nominal
/// big-endian order.
pub fn parse_header(data: &[u8]) -> Result<ActHeader, PaletteError> {
    if data.len() % 3 == 0 {
        return Ok(ActHeader {
            byte_order: ByteOrder::Big,
            color_range: -1,
            alpha_color_index: -1,
        });
    }
    if data.len() < 4 {
        return Err(PaletteError::InvalidHeader(
            "ACT data too short for a footer".into(),
        ));
    }

    let mut cur = Cursor::new(data, ByteOrder::Big);

    // Order heuristic: the big-endian count times 3 must land exactly on
    // the footer offset; anything else means the integers are
    // little-endian.
    cur.seek_from_end(4)?;
    let footer_pos = cur.position();
    let probed_range = cur.get_i16()?;
    if probed_range as i64 * 3 != footer_pos as i64 {
        cur.set_order(ByteOrder::Little);
    }

    cur.seek_from_end(4)?;
    let mut color_range = cur.get_i16()?;
    let mut alpha_color_index = cur.get_i16()?;
    if color_range as i64 * 3 + 4 != data.len() as i64 {
        color_range = -1;
        alpha_color_index = -1;
    }

    Ok(ActHeader {
        byte_order: cur.order(),
        color_range,
        alpha_color_index,
    })
}

pub(crate) fn decode_palette(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    let header = parse_header(data)?;

    let count = if header.color_range >= 0 {
        header.color_range as usize
    } else if data.len() % 3 == 0 {
        data.len() / 3
    } else {
        // Footer inconsistent with file length: ACT's documented fallback.
        256
    };

    if let Some(limits) = limits {
        limits.check_colors(count)?;
        limits.check_memory(count * size_of::<Color>())?;
    }

    // Color triples are raw bytes in B,G,R file order; the detected byte
    // order only governed the footer integers above.
    let mut cur = Cursor::new(data, header.byte_order);
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        if i % 64 == 0 {
            stop.check()?;
        }
        let b = cur.read_fixed::<3>()?;
        colors.push(Color::rgb(b[2], b[1], b[0]));
    }

    Ok(Palette::new(PaletteFormat::Act, colors))
}
