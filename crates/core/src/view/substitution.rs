use super::View;

/// A base view with a single position overridden.
///
/// `at(index)` returns the override value and every other position reads
/// through to the base. The length is the base length. This is how a point
/// with one coordinate shifted is expressed without touching the point.
///
/// Construction never fails. The override position is only consulted on
/// access, and accessing any position at or past `len()` panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstitutionView<V> {
    base: V,
    index: usize,
    value: f64,
}

impl<V: View> SubstitutionView<V> {
    /// Creates a view of `base` with position `index` replaced by `value`.
    #[must_use]
    pub const fn new(base: V, index: usize, value: f64) -> Self {
        Self { base, index, value }
    }

    /// Returns the wrapped base view.
    #[must_use]
    pub const fn base(&self) -> &V {
        &self.base
    }

    /// Returns the overridden position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the override value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl<V: View> View for SubstitutionView<V> {
    fn len(&self) -> usize {
        self.base.len()
    }

    fn at(&self, index: usize) -> f64 {
        if index == self.index {
            assert!(
                index < self.base.len(),
                "substituted index {index} out of range for view of length {}",
                self.base.len()
            );
            self.value
        } else {
            self.base.at(index)
        }
    }
}
