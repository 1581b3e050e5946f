use super::View;

/// A view that mirrors a borrowed slice exactly.
///
/// `ConstView` is the entry point for caller-owned coordinate storage: it is
/// a `Copy` handle to the slice, so nesting it inside other views never
/// copies the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstView<'a> {
    source: &'a [f64],
}

impl<'a> ConstView<'a> {
    /// Creates a view over `source`.
    #[must_use]
    pub const fn new(source: &'a [f64]) -> Self {
        Self { source }
    }

    /// Returns the underlying slice.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [f64] {
        self.source
    }
}

impl View for ConstView<'_> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn at(&self, index: usize) -> f64 {
        self.source[index]
    }
}

impl<'a> From<&'a [f64]> for ConstView<'a> {
    fn from(source: &'a [f64]) -> Self {
        Self::new(source)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ConstView<'a> {
    fn from(source: &'a [f64; N]) -> Self {
        Self::new(source)
    }
}

impl<'a> From<&'a Vec<f64>> for ConstView<'a> {
    fn from(source: &'a Vec<f64>) -> Self {
        Self::new(source)
    }
}
