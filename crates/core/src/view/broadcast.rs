use super::View;

/// A constant repeated `len` times, with no backing storage.
///
/// Feeding a `BroadcastView` into a [`BinaryOpView`](super::BinaryOpView)
/// is how a scalar is multiplied against, or added to, every element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadcastView {
    len: usize,
    value: f64,
}

impl BroadcastView {
    /// Creates a view of `len` copies of `value`. Any length, including zero, is valid.
    #[must_use]
    pub const fn new(len: usize, value: f64) -> Self {
        Self { len, value }
    }

    /// Returns the repeated value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl View for BroadcastView {
    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> f64 {
        assert!(
            index < self.len,
            "index {index} out of range for broadcast of length {}",
            self.len
        );
        self.value
    }
}
