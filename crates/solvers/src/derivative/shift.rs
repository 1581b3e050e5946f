use minimize_core::{
    BinaryOpView, BroadcastView, LengthMismatch, Product, SubstitutionView, Sum, View, scalar_mul,
    sum,
};

/// The lazy view `point + t · direction` returned by [`shift_along`].
pub type Shifted<P, D> = BinaryOpView<Sum, P, BinaryOpView<Product, BroadcastView, D>>;

/// Returns `point` with coordinate `axis` moved by `offset`.
///
/// # Panics
///
/// Panics if `axis >= point.len()`.
pub fn shift_axis<P: View>(point: P, axis: usize, offset: f64) -> SubstitutionView<P> {
    let value = point.at(axis) + offset;
    SubstitutionView::new(point, axis, value)
}

/// Returns `point + t · direction` as a lazy view.
///
/// # Errors
///
/// Returns [`LengthMismatch`] if `point` and `direction` differ in length.
pub fn shift_along<P: View, D: View>(
    point: P,
    direction: D,
    t: f64,
) -> Result<Shifted<P, D>, LengthMismatch> {
    sum(point, scalar_mul(t, direction))
}
