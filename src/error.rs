use enough::StopReason;

/// Errors from palette decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PaletteError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid palette data: {0}")]
    InvalidData(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PaletteError {
    fn from(r: StopReason) -> Self {
        PaletteError::Cancelled(r)
    }
}
