//! # zenswatch
//!
//! Decoder for the color-palette files image editors trade in: Adobe
//! Color (ACO), Adobe Color Table (ACT), Adobe Swatch Exchange (ASE),
//! RIFF PAL, and JASC-style PAL, plus an ACT encoder.
//!
//! Every format normalizes to an ordered sequence of 8-bit RGBA
//! [`Color`]s. Formats that embed other color spaces (HSV, CMYK, Lab,
//! grayscale) are converted with the math in [`color`]; formats with
//! ambiguous byte order (ACT, RIFF PAL) infer it from structural
//! consistency checks before trusting any header field.
//!
//! ## Non-Goals
//!
//! - Palette formats beyond the five above
//! - File-system traversal or CLI surfaces (all APIs take `&[u8]`)
//! - Round-trip precision beyond what each format itself stores
//!
//! ## Usage
//!
//! ```no_run
//! use zenswatch::{PaletteInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your palette bytes
//!
//! // Probe without decoding
//! let info = PaletteInfo::from_bytes(data)?;
//! println!("{:?}, {:?} colors", info.format, info.color_count);
//!
//! // Decode (sniffs ASE/RIFF/JASC magics and the ACO structure)
//! let palette = zenswatch::decode(data, Unstoppable)?;
//! for color in &palette {
//!     println!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
//! }
//!
//! // ACT has no magic; decode it explicitly
//! let table = zenswatch::decode_act(data, Unstoppable)?;
//! # Ok::<(), zenswatch::PaletteError>(())
//! ```

#![forbid(unsafe_code)]

mod cursor;
mod decode;
mod error;
mod info;
mod limits;
mod palette;
mod raw;

pub mod color;

pub mod aco;
pub mod act;
pub mod ase;
pub mod jasc;
pub mod riff;

// Re-exports
pub use color::Color;
pub use cursor::ByteOrder;
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PaletteError;
pub use info::{PaletteFormat, PaletteInfo, SUPPORTED_EXTENSIONS};
pub use limits::Limits;
pub use palette::Palette;

/// Decode a palette, sniffing the format from magic bytes / structure.
///
/// ACT and raw 4-byte tables carry no signature and are never sniffed;
/// use [`decode_act`] / [`decode_raw`] for those.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode an Adobe Color Table.
pub fn decode_act(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::Act)
        .decode(stop)
}

/// Decode an Adobe Color (ACO) file.
pub fn decode_aco(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::Aco)
        .decode(stop)
}

/// Decode an Adobe Swatch Exchange file.
pub fn decode_ase(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::Ase)
        .decode(stop)
}

/// Decode a RIFF-contained Windows palette.
pub fn decode_riff_pal(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::RiffPal)
        .decode(stop)
}

/// Decode a JASC-style delimiter-based palette.
pub fn decode_jasc_pal(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::JascPal)
        .decode(stop)
}

/// Decode a headerless 4-byte-per-entry B,G,R,A table.
///
/// A trailing partial entry is silently dropped.
pub fn decode_raw(data: &[u8], stop: impl Stop) -> Result<Palette, PaletteError> {
    DecodeRequest::new(data)
        .with_format(PaletteFormat::Raw)
        .decode(stop)
}

/// Encode colors as an ACT table.
///
/// `byte_order` governs the optional footer's integers (the color
/// triples are plain bytes). Empty input encodes to empty output.
pub fn encode_act(
    colors: &[Color],
    byte_order: ByteOrder,
    with_footer: bool,
    stop: impl Stop,
) -> Result<Vec<u8>, PaletteError> {
    act::encode(colors, byte_order, with_footer, &stop)
}
