//! ASE header probe and block walker.

use enough::Stop;

use super::{BLOCK_GROUP_END, BLOCK_GROUP_START, MAGIC};
use crate::color::{self};
use crate::cursor::{ByteOrder, Cursor};
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Probed ASE metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AseHeader {
    /// Declared block count. Counts color blocks and group markers alike,
    /// so it is an upper bound on the color count, not the count itself.
    pub block_count: i32,
}

/// Validate the ASE magic and read the block count.
pub fn parse_header(data: &[u8]) -> Result<AseHeader, PaletteError> {
    let mut cur = Cursor::new(data, ByteOrder::Big);

    if &cur.read_fixed::<4>()? != MAGIC {
        return Err(PaletteError::UnrecognizedFormat);
    }
    // Format version, unused.
    cur.skip(4)?;
    let block_count = cur.get_i32()?;
    if block_count < 0 {
        return Err(PaletteError::InvalidHeader(format!(
            "negative ASE block count {block_count}"
        )));
    }

    Ok(AseHeader { block_count })
}

pub(crate) fn decode_palette(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    let header = parse_header(data)?;
    if let Some(limits) = limits {
        limits.check_colors(header.block_count as usize)?;
    }

    let mut cur = Cursor::new(data, ByteOrder::Big);
    cur.set_position(12)?;

    let mut colors = Vec::new();
    for i in 0..header.block_count {
        if i % 64 == 0 {
            stop.check()?;
        }

        let block_type = cur.get_u16()?;
        // Declared block length; navigation stays field-by-field.
        cur.skip(4)?;
        if block_type == BLOCK_GROUP_END {
            continue;
        }

        let name_units = cur.get_i16()?;
        if name_units < 0 {
            return Err(PaletteError::InvalidData(format!(
                "negative ASE block name length {name_units}"
            )));
        }
        cur.skip(name_units as usize * 2)?;
        if block_type == BLOCK_GROUP_START {
            continue;
        }

        let tag = cur.read_fixed::<4>()?;
        let color = match &tag {
            b"CMYK" => color::cmyk_to_rgb(
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                1.0,
            ),
            b"Lab " => color::lab_to_rgb(
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                1.0,
            ),
            b"Gray" => {
                let v = cur.get_f32()? as f64;
                color::from_normalized_rgb(v, v, v)
            }
            // Any other tag is treated as RGB.
            _ => color::from_normalized_rgb(
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
                cur.get_f32()? as f64,
            ),
        };

        // Color mode flag (global/spot/normal), unused.
        cur.skip(2)?;
        colors.push(color);
    }

    Ok(Palette::new(PaletteFormat::Ase, colors))
}
