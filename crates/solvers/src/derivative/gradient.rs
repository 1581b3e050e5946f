use minimize_core::{Function, View};
use tracing::debug;

use super::{Config, derive_by_axis};

/// Returns the finite-difference gradient of `f` at `point`.
///
/// Component `i` is [`derive_by_axis`] along axis `i`, so the cost is
/// `point.len() · stencil.points()` evaluations of `f`. An empty point gives
/// an empty gradient.
pub fn auto_grad<F, P>(f: &F, point: &P, config: &Config) -> Vec<f64>
where
    F: Function,
    P: View + ?Sized,
{
    let gradient: Vec<f64> = (0..point.len())
        .map(|axis| derive_by_axis(f, point, axis, config))
        .collect();

    debug!(
        dimension = gradient.len(),
        evaluations = gradient.len() * config.stencil().points(),
        "gradient"
    );
    gradient
}
