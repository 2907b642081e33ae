use crate::error::PaletteError;

/// Palette file extensions this crate understands.
///
/// `.pal` is ambiguous (RIFF PAL or JASC PAL) and is resolved by magic
/// sniffing, not extension.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".act", ".aco", ".ase", ".pal"];

/// Palette file format.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    /// Adobe Color Table: fixed 3-byte B,G,R entries, optional footer.
    Act,
    /// Adobe Color: 10-byte records, protocol 1 and optionally 2 (named).
    Aco,
    /// Adobe Swatch Exchange: named variable-length color blocks.
    Ase,
    /// RIFF-contained Windows palette (`"PAL data"` chunk).
    RiffPal,
    /// JASC-style delimiter-terminated text/binary hybrid palette.
    JascPal,
    /// Headerless 4-byte B,G,R,A table (raw fallback path).
    Raw,
}

impl PaletteFormat {
    /// Map a file extension to a format, when the mapping is unambiguous.
    ///
    /// Accepts the extension with or without the leading dot, case
    /// insensitively. `.pal` returns `None`; sniff with
    /// [`PaletteInfo::from_bytes`] instead.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.eq_ignore_ascii_case("act") {
            Some(Self::Act)
        } else if ext.eq_ignore_ascii_case("aco") {
            Some(Self::Aco)
        } else if ext.eq_ignore_ascii_case("ase") {
            Some(Self::Ase)
        } else {
            None
        }
    }
}

/// Palette metadata probed from a byte buffer without a full decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteInfo {
    pub format: PaletteFormat,
    /// Declared color count, when the header states one.
    ///
    /// `None` for ASE, whose block count mixes colors and group markers.
    pub color_count: Option<u32>,
}

impl PaletteInfo {
    /// Identify a palette format from magic bytes / structure.
    ///
    /// Tries ASE, RIFF PAL, and JASC PAL magics, then the ACO two-stage
    /// structural probe. ACT and raw buffers carry no signature and are
    /// never auto-detected; decode those via an explicit format.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PaletteError> {
        if data.starts_with(crate::ase::MAGIC) {
            crate::ase::parse_header(data)?;
            return Ok(Self {
                format: PaletteFormat::Ase,
                color_count: None,
            });
        }
        if data.starts_with(crate::riff::MAGIC) {
            let header = crate::riff::parse_header(data)?;
            return Ok(Self {
                format: PaletteFormat::RiffPal,
                color_count: Some(header.color_range.max(0) as u32),
            });
        }
        if data.starts_with(crate::jasc::MAGIC) {
            let header = crate::jasc::parse_header(data)?;
            return Ok(Self {
                format: PaletteFormat::JascPal,
                color_count: Some(header.color_range.max(0) as u32),
            });
        }
        if let Ok(header) = crate::aco::parse_header(data) {
            return Ok(Self {
                format: PaletteFormat::Aco,
                color_count: Some(header.color_range.max(0) as u32),
            });
        }
        Err(PaletteError::UnrecognizedFormat)
    }
}
