//! Adobe Color (ACO): fixed 10-byte color records in up to two protocol
//! blocks: protocol 1 (plain) followed by protocol 2 (named).
//!
//! Everything is big-endian. Each record is a color-space tag plus four
//! 16-bit component words; the tag selects RGB, HSV, CMYK, Lab, or
//! grayscale interpretation. When a protocol-2 block follows the
//! protocol-1 block, its colors and names replace the first pass's.

mod decode;

pub use decode::{AcoHeader, parse_header};

use enough::Stop;

use crate::error::PaletteError;
use crate::limits::Limits;
use crate::palette::Palette;

/// Decode ACO data (called from [`crate::DecodeRequest`]).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Palette, PaletteError> {
    decode::decode_palette(data, limits, stop)
}
