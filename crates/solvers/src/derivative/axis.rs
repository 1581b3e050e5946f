use minimize_core::{Function, View};
use tracing::trace;

use super::{Config, shift::shift_axis};

/// Returns the partial derivative of `f` along coordinate `axis` at `point`.
///
/// Each stencil sample evaluates `f` on a [`SubstitutionView`] of `point`
/// with coordinate `axis` shifted, so `point` itself is never copied.
///
/// # Panics
///
/// Panics if `axis >= point.len()`.
///
/// [`SubstitutionView`]: minimize_core::SubstitutionView
pub fn derive_by_axis<F, P>(f: &F, point: &P, axis: usize, config: &Config) -> f64
where
    F: Function,
    P: View + ?Sized,
{
    let stencil = config.stencil();
    let derivative = stencil.apply(config.step(), |shift| {
        f.call(&shift_axis(point, axis, shift))
    });

    trace!(axis, step = config.step(), ?stencil, derivative, "partial derivative");
    derivative
}
