use enough::Stop;

use crate::error::PaletteError;
use crate::info::{PaletteFormat, PaletteInfo};
use crate::limits::Limits;
use crate::palette::Palette;

/// A configurable decode operation.
///
/// The format is sniffed from magic bytes unless forced with
/// [`with_format`](Self::with_format); ACT and raw buffers have no
/// signature and can only be decoded by forcing their format.
///
/// ```no_run
/// use zenswatch::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your palette bytes
/// let palette = DecodeRequest::new(data)
///     .with_limits(Limits {
///         max_colors: Some(4096),
///         ..Limits::default()
///     })
///     .decode(Unstoppable)?;
/// # Ok::<(), zenswatch::PaletteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<Limits>,
    format: Option<PaletteFormat>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            format: None,
        }
    }

    /// Apply resource limits to the decode.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Skip sniffing and decode as `format`.
    pub fn with_format(mut self, format: PaletteFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Run the decode.
    pub fn decode(self, stop: impl Stop) -> Result<Palette, PaletteError> {
        let format = match self.format {
            Some(format) => format,
            None => PaletteInfo::from_bytes(self.data)?.format,
        };
        let limits = self.limits.as_ref();
        let stop: &dyn Stop = &stop;

        match format {
            PaletteFormat::Act => crate::act::decode(self.data, limits, stop),
            PaletteFormat::Aco => crate::aco::decode(self.data, limits, stop),
            PaletteFormat::Ase => crate::ase::decode(self.data, limits, stop),
            PaletteFormat::RiffPal => crate::riff::decode(self.data, limits, stop),
            PaletteFormat::JascPal => crate::jasc::decode(self.data, limits, stop),
            PaletteFormat::Raw => crate::raw::decode(self.data, limits, stop),
        }
    }
}
