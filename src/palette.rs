use crate::color::Color;
use crate::info::PaletteFormat;

/// Decoded palette: an ordered color sequence plus optional per-entry names.
///
/// Order is semantically meaningful; consumers reference colors by index.
/// A `Palette` is fully populated at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    names: Vec<Option<String>>,
    format: PaletteFormat,
}

impl Palette {
    pub(crate) fn new(format: PaletteFormat, colors: Vec<Color>) -> Self {
        Self {
            colors,
            names: Vec::new(),
            format,
        }
    }

    pub(crate) fn with_names(
        format: PaletteFormat,
        colors: Vec<Color>,
        names: Vec<Option<String>>,
    ) -> Self {
        debug_assert_eq!(colors.len(), names.len());
        Self {
            colors,
            names,
            format,
        }
    }

    /// The format this palette was decoded from.
    pub fn format(&self) -> PaletteFormat {
        self.format
    }

    /// All colors, in file order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Per-entry names, parallel to [`colors`](Self::colors).
    ///
    /// Empty unless the source format carries names (ACO protocol 2).
    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }

    /// Name of the color at `index`, if the format recorded one.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Take ownership of the color sequence.
    pub fn into_colors(self) -> Vec<Color> {
        self.colors
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
