//! ACT encoder.

use enough::Stop;

use crate::color::Color;
use crate::cursor::ByteOrder;
use crate::error::PaletteError;

/// Encode colors as an ACT table, optionally appending the 4-byte footer.
///
/// Triples are written in B,G,R file order. The footer's transparent
/// index is the first color with nonzero alpha (first match only), −1
/// when every color is fully transparent. An empty input produces empty
/// output, not an error.
pub(crate) fn encode_act(
    colors: &[Color],
    byte_order: ByteOrder,
    with_footer: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PaletteError> {
    if colors.is_empty() {
        return Ok(Vec::new());
    }
    if colors.len() > i16::MAX as usize {
        return Err(PaletteError::InvalidData(format!(
            "{} colors cannot be represented in an ACT footer",
            colors.len()
        )));
    }

    stop.check()?;

    let color_range = colors.len() as i16;
    let alpha_color_index = colors
        .iter()
        .position(|c| c.a > 0)
        .map_or(-1i16, |i| i as i16);

    let mut out = Vec::with_capacity(colors.len() * 3 + if with_footer { 4 } else { 0 });
    for (i, color) in colors.iter().enumerate() {
        if i % 64 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(&[color.b, color.g, color.r]);
    }

    if with_footer {
        match byte_order {
            ByteOrder::Big => {
                out.extend_from_slice(&color_range.to_be_bytes());
                out.extend_from_slice(&alpha_color_index.to_be_bytes());
            }
            ByteOrder::Little => {
                out.extend_from_slice(&color_range.to_le_bytes());
                out.extend_from_slice(&alpha_color_index.to_le_bytes());
            }
        }
    }

    Ok(out)
}
