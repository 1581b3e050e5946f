use crate::View;

/// A pure scalar function of a point.
///
/// Derivative routines hand a `Function` perturbed views of the caller's
/// point (a substituted coordinate, or a lazily shifted vector), so the
/// function must accept any [`View`] rather than a concrete container.
///
/// Implementations must be deterministic: equal inputs give equal outputs.
///
/// Closures taking `&dyn View` implement this trait automatically:
///
/// ```
/// use minimize_core::{Function, View};
///
/// let norm_sq = |x: &dyn View| (0..x.len()).map(|i| x.at(i) * x.at(i)).sum::<f64>();
///
/// assert_eq!(norm_sq.call(&[3.0, 4.0]), 25.0);
/// ```
///
/// Types that want static dispatch over the view type implement it directly.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call<V: View>(&self, x: &V) -> f64;
}

impl<F> Function for F
where
    F: Fn(&dyn View) -> f64,
{
    fn call<V: View>(&self, x: &V) -> f64 {
        self(x)
    }
}
