//! Headerless 4-byte-per-entry palette reader (raw fallback path).

use enough::Stop;

use crate::color::Color;
use crate::error::PaletteError;
use crate::info::PaletteFormat;
use crate::limits::Limits;
use crate::palette::Palette;

/// Decode a flat buffer of 4-byte entries stored as B, G, R, A.
///
/// There is no header and no validity check. A trailing partial entry
/// (length not a multiple of 4) is silently dropped, not an error.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    let count = data.len() / 4;
    if let Some(limits) = limits {
        limits.check_colors(count)?;
        limits.check_memory(count * size_of::<Color>())?;
    }

    let mut colors = Vec::with_capacity(count);
    for (i, entry) in data.chunks_exact(4).enumerate() {
        if i % 1024 == 0 {
            stop.check()?;
        }
        colors.push(Color::rgba(entry[2], entry[1], entry[0], entry[3]));
    }

    Ok(Palette::new(PaletteFormat::Raw, colors))
}
