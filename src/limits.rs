/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Declared color counts are
/// checked against these before any allocation sized from them.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum number of colors a single palette may declare.
    pub max_colors: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a declared color count against limits.
    pub(crate) fn check_colors(&self, count: usize) -> Result<(), crate::PaletteError> {
        if let Some(max) = self.max_colors {
            if count as u64 > max {
                return Err(crate::PaletteError::LimitExceeded(format!(
                    "color count {count} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::PaletteError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::PaletteError::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
