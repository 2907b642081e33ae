//! RIFF-contained Windows palette (RIFF PAL): `RIFF` container magic, a
//! `"PAL data"` chunk, then a flat table of 4-byte R,G,B,pad entries.
//!
//! The header integers are nominally little-endian; a self-check against
//! the container's declared data length flips the probe to big-endian for
//! files written the wrong way round. The color table itself is read
//! little-endian regardless.

mod decode;

pub use decode::{RiffHeader, parse_header};

use enough::Stop;

use crate::error::PaletteError;
use crate::limits::Limits;
use crate::palette::Palette;

/// RIFF container magic.
pub(crate) const MAGIC: &[u8; 4] = b"RIFF";

/// Chunk name a palette RIFF must carry.
pub(crate) const CHUNK_NAME: &[u8; 8] = b"PAL data";

/// Decode RIFF PAL data (called from [`crate::DecodeRequest`]).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    decode::decode_palette(data, limits, stop)
}
