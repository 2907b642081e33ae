//! RIFF PAL header probe and body decoder.

use enough::Stop;

use super::{CHUNK_NAME, MAGIC};
use crate::color::Color;
use crate::cursor::{ByteOrder, Cursor};
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Probed RIFF PAL metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    /// Byte order the header integers were read in (the color table is
    /// always little-endian).
    pub byte_order: ByteOrder,
    /// Container data length (file length minus the 8-byte RIFF prelude).
    pub data_length: i32,
    /// `"PAL data"` chunk length.
    pub chunk_length: i32,
    pub color_range: i16,
}

/// Validate the RIFF magic and `"PAL data"` chunk and probe the header.
pub fn parse_header(data: &[u8]) -> Result<RiffHeader, PaletteError> {
    if data.len() < 0x16 {
        return Err(PaletteError::InvalidHeader(
            "RIFF PAL data shorter than minimum header".into(),
        ));
    }
    if &data[0..4] != MAGIC {
        return Err(PaletteError::UnrecognizedFormat);
    }

    let mut cur = Cursor::new(data, ByteOrder::Little);

    // Order self-check: the container length field must equal the bytes
    // that follow it; if the little-endian reading disagrees, the header
    // integers are big-endian. Rewind and re-read under the winner.
    cur.skip(4)?;
    let probed_length = cur.get_i32()?;
    if probed_length as i64 != data.len() as i64 - 4 {
        cur.set_order(ByteOrder::Big);
    }
    cur.set_position(0)?;

    if &cur.read_fixed::<4>()? != MAGIC {
        return Err(PaletteError::UnrecognizedFormat);
    }
    let data_length = cur.get_i32()?;
    if &cur.read_fixed::<8>()? != CHUNK_NAME {
        return Err(PaletteError::InvalidHeader(
            "missing \"PAL data\" chunk".into(),
        ));
    }
    let chunk_length = cur.get_i32()?;
    // palVersion, unused.
    cur.skip(2)?;
    let color_range = cur.get_i16()?;
    if color_range < 0 {
        return Err(PaletteError::InvalidHeader(format!(
            "negative RIFF PAL color count {color_range}"
        )));
    }

    Ok(RiffHeader {
        byte_order: cur.order(),
        data_length,
        chunk_length,
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

    // The color table is little-endian no matter what the header probe
    // detected; entries are R,G,B plus an ignored pad byte.
    let mut cur = Cursor::new(data, ByteOrder::Little);
    cur.set_position(0x18)?;

    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        if i % 64 == 0 {
            stop.check()?;
        }
        let b = cur.read_fixed::<4>()?;
        colors.push(Color::rgb(b[0], b[1], b[2]));
    }

    Ok(Palette::new(PaletteFormat::RiffPal, colors))
}
