//! Adobe Color Table (ACT): fixed 3-byte B,G,R entries with an optional
//! 4-byte footer (color count + transparent index).
//!
//! ACT carries no magic bytes. Footerless files (length a multiple of 3)
//! hold `length / 3` colors; otherwise the footer's declared count is
//! validated against the file length and falls back to 256 entries when
//! inconsistent. The footer's byte order is inferred, never flagged.

mod decode;
mod encode;

pub use decode::{ActHeader, parse_header};

use enough::Stop;

use crate::color::Color;
use crate::cursor::ByteOrder;
use crate::error::PaletteError;
use crate::limits::Limits;
use crate::palette::Palette;

/// Decode ACT data (called from [`crate::DecodeRequest`]).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    decode::decode_palette(data, limits, stop)
}

/// Encode colors as ACT.
pub(crate) fn encode(
    colors: &[Color],
    byte_order: ByteOrder,
    with_footer: bool,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PaletteError> {
    encode::encode_act(colors, byte_order, with_footer, stop)
}
