//! JASC-style delimiter-based palette (text/binary hybrid): `JASC-PAL`
//! magic, a file-specific 2-byte field terminator, two redundant color
//! counts (hexadecimal and decimal), then whitespace-separated decimal
//! R G B triples.
//!
//! Fields are delimiter-terminated, so their lengths are data-dependent;
//! reads scan byte-by-byte rather than jumping fixed widths.

mod decode;

pub use decode::{JascHeader, parse_header};

use enough::Stop;

use crate::error::PaletteError;
use crate::limits::Limits;
use crate::palette::Palette;

/// JASC palette magic.
pub(crate) const MAGIC: &[u8; 8] = b"JASC-PAL";

/// Decode JASC PAL data (called from [`crate::DecodeRequest`]).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    decode::decode_palette(data, limits, stop)
}
