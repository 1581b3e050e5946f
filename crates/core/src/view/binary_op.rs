use crate::LengthMismatch;

use super::{BroadcastView, View};

/// A binary operator applied elementwise by [`BinaryOpView`].
///
/// Closures of type `Fn(f64, f64) -> f64` are operators too.
pub trait BinaryOp {
    /// Combines one element from each side.
    fn apply(&self, lhs: f64, rhs: f64) -> f64;
}

/// Elementwise `lhs + rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

/// Elementwise `lhs - rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Difference;

/// Elementwise `lhs * rhs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl BinaryOp for Sum {
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }
}

impl BinaryOp for Difference {
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }
}

impl BinaryOp for Product {
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }
}

impl<F> BinaryOp for F
where
    F: Fn(f64, f64) -> f64,
{
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        self(lhs, rhs)
    }
}

/// Two equal-length views combined elementwise: `at(i) = op(lhs.at(i), rhs.at(i))`.
///
/// Nothing is computed until an element is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryOpView<Op, A, B> {
    op: Op,
    lhs: A,
    rhs: B,
}

impl<Op, A, B> BinaryOpView<Op, A, B>
where
    Op: BinaryOp,
    A: View,
    B: View,
{
    /// Combines `lhs` and `rhs` with `op`.
    ///
    /// # Errors
    ///
    /// Returns [`LengthMismatch`] if the views have different lengths.
    pub fn new(op: Op, lhs: A, rhs: B) -> Result<Self, LengthMismatch> {
        LengthMismatch::check(lhs.len(), rhs.len())?;
        Ok(Self { op, lhs, rhs })
    }

    /// Returns the left operand.
    pub fn lhs(&self) -> &A {
        &self.lhs
    }

    /// Returns the right operand.
    pub fn rhs(&self) -> &B {
        &self.rhs
    }
}

impl<Op, A, B> View for BinaryOpView<Op, A, B>
where
    Op: BinaryOp,
    A: View,
    B: View,
{
    fn len(&self) -> usize {
        self.lhs.len()
    }

    fn at(&self, index: usize) -> f64 {
        self.op.apply(self.lhs.at(index), self.rhs.at(index))
    }
}

impl<A, V> BinaryOpView<Sum, A, BinaryOpView<Product, BroadcastView, V>>
where
    A: View + Clone,
    V: View + Clone,
{
    /// Returns `lhs + k · v` for a new scale `k`, reusing both operands.
    ///
    /// The operand lengths were checked when this view was built and do not
    /// change, so rescaling cannot fail.
    #[must_use]
    pub fn with_scale(&self, k: f64) -> Self {
        let scaled = &self.rhs;
        Self {
            op: Sum,
            lhs: self.lhs.clone(),
            rhs: BinaryOpView {
                op: Product,
                lhs: BroadcastView::new(scaled.lhs.len(), k),
                rhs: scaled.rhs.clone(),
            },
        }
    }
}

/// Returns the lazy elementwise sum `lhs + rhs`.
///
/// # Errors
///
/// Returns [`LengthMismatch`] if the views have different lengths.
pub fn sum<A: View, B: View>(lhs: A, rhs: B) -> Result<BinaryOpView<Sum, A, B>, LengthMismatch> {
    BinaryOpView::new(Sum, lhs, rhs)
}

/// Returns the lazy elementwise difference `lhs - rhs`.
///
/// # Errors
///
/// Returns [`LengthMismatch`] if the views have different lengths.
pub fn difference<A: View, B: View>(
    lhs: A,
    rhs: B,
) -> Result<BinaryOpView<Difference, A, B>, LengthMismatch> {
    BinaryOpView::new(Difference, lhs, rhs)
}

/// Returns the lazy elementwise product `lhs * rhs`.
///
/// # Errors
///
/// Returns [`LengthMismatch`] if the views have different lengths.
pub fn product<A: View, B: View>(
    lhs: A,
    rhs: B,
) -> Result<BinaryOpView<Product, A, B>, LengthMismatch> {
    BinaryOpView::new(Product, lhs, rhs)
}

/// Returns `k * view` as a lazy product with a broadcast of `k`.
///
/// Cannot fail: the broadcast takes its length from `view`.
pub fn scalar_mul<V: View>(k: f64, view: V) -> BinaryOpView<Product, BroadcastView, V> {
    BinaryOpView {
        op: Product,
        lhs: BroadcastView::new(view.len(), k),
        rhs: view,
    }
}

/// Returns `k + view` as a lazy sum with a broadcast of `k`.
pub fn scalar_add<V: View>(k: f64, view: V) -> BinaryOpView<Sum, BroadcastView, V> {
    BinaryOpView {
        op: Sum,
        lhs: BroadcastView::new(view.len(), k),
        rhs: view,
    }
}
