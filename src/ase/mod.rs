//! Adobe Swatch Exchange (ASE): magic-validated sequence of
//! variable-length named blocks with 4-character color-space tags and
//! 32-bit float components.
//!
//! Navigation is strictly sequential field-by-field; the declared block
//! length is skipped and never used to jump, so one malformed block
//! desynchronizes the rest. That matches the format's established
//! behavior on malformed inputs and is deliberately not hardened.

mod decode;

pub use decode::{AseHeader, parse_header};

use enough::Stop;

use crate::error::PaletteError;
use crate::limits::Limits;
use crate::palette::Palette;

/// ASE file magic.
pub(crate) const MAGIC: &[u8; 4] = b"ASEF";

/// Block type markers. Group blocks are structural only.
pub(crate) const BLOCK_GROUP_START: u16 = 0xC001;
pub(crate) const BLOCK_GROUP_END: u16 = 0xC002;

/// Decode ASE data (called from [`crate::DecodeRequest`]).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    decode::decode_palette(data, limits, stop)
}
