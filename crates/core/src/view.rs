//! Read-only, lazily evaluated views over sequences of `f64`.
//!
//! A [`View`] is anything with a length and a pure `at(i)` accessor. Views
//! borrow their sources and are cheap to copy: copying a view copies its
//! descriptor (a slice handle, an override pair, a constant), never the data.
//!
//! # Variants
//!
//! - [`ConstView`]: mirrors a borrowed slice exactly
//! - [`SubstitutionView`]: a base view with one position overridden
//! - [`BroadcastView`]: a constant repeated `len` times, with no storage
//! - [`BinaryOpView`]: two equal-length views combined elementwise
//!
//! Composition is done by nesting values. Shifting a point along a direction
//! by `t` is `sum(point, scalar_mul(t, direction))`, which allocates nothing.
//!
//! # Indexing contract
//!
//! Calling [`View::at`] with `index >= len()` is a contract violation and
//! panics. Use [`View::checked_at`] for checked access.

mod binary_op;
mod broadcast;
mod constant;
mod iter;
mod substitution;

pub use binary_op::{
    BinaryOp, BinaryOpView, Difference, Product, Sum, difference, product, scalar_add, scalar_mul,
    sum,
};
pub use broadcast::BroadcastView;
pub use constant::ConstView;
pub use iter::Iter;
pub use substitution::SubstitutionView;

use crate::LengthMismatch;

/// A sized, indexable, read-only sequence of real numbers.
///
/// Implementations must be pure: repeated calls to `at(i)` without mutating
/// the underlying source return the same value.
pub trait View {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> f64;

    /// Returns `true` if the view has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    fn checked_at(&self, index: usize) -> Option<f64> {
        (index < self.len()).then(|| self.at(index))
    }

    /// Returns an iterator over the elements in order.
    fn values(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Returns an iterator over `(index, value)` pairs.
    fn indexed(&self) -> std::iter::Enumerate<Iter<'_, Self>>
    where
        Self: Sized,
    {
        self.values().enumerate()
    }

    /// Materializes the view into a freshly allocated vector.
    fn to_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.at(i)).collect()
    }

    /// Returns the inner product with another view of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`LengthMismatch`] if the lengths differ.
    fn dot<V: View>(&self, other: &V) -> Result<f64, LengthMismatch>
    where
        Self: Sized,
    {
        LengthMismatch::check(self.len(), other.len())?;
        Ok(self.values().zip(other.values()).map(|(a, b)| a * b).sum())
    }

    /// Returns the Euclidean norm.
    fn norm(&self) -> f64 {
        (0..self.len())
            .map(|i| self.at(i) * self.at(i))
            .sum::<f64>()
            .sqrt()
    }
}

impl<V: View + ?Sized> View for &V {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> f64 {
        (**self).at(index)
    }
}

impl View for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn at(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize> View for [f64; N] {
    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> f64 {
        self[index]
    }
}

impl View for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> f64 {
        self[index]
    }
}
