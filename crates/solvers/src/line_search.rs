//! Golden section search along a direction from a point.
//!
//! [`minimize_along`] restricts a multivariate [`Function`] to the line
//! `t ↦ f(point + t · direction)` and minimizes it over a bracket of `t`.
//! Every trial point is a lazy [`Shifted`] view, so neither the point nor the
//! direction is copied. This is a single 1-D minimization, not an iterative
//! multivariate optimizer.

use minimize_core::{Function, LengthMismatch, View};
use thiserror::Error;
use tracing::debug;

use crate::derivative::{self, Shifted, derive_by_direction, shift_along};
use crate::optimization::golden_section::{self, Status, minimize_unobserved};

/// Configuration for a line search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    search: golden_section::Config,
    derivative: derivative::Config,
}

impl Config {
    /// Creates a config from its search and derivative parts.
    #[must_use]
    pub fn new(search: golden_section::Config, derivative: derivative::Config) -> Self {
        Self { search, derivative }
    }

    /// Returns the golden section config used along the line.
    #[must_use]
    pub fn search(&self) -> &golden_section::Config {
        &self.search
    }

    /// Returns the derivative config used for the slope at the minimum.
    #[must_use]
    pub fn derivative(&self) -> &derivative::Config {
        &self.derivative
    }
}

/// Errors that can occur during a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("point and direction differ: {0}")]
    LengthMismatch(#[from] LengthMismatch),
}

impl From<derivative::Error> for Error {
    fn from(error: derivative::Error) -> Self {
        match error {
            derivative::Error::LengthMismatch(mismatch) => Self::LengthMismatch(mismatch),
        }
    }
}

/// The minimum found along a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMinimum {
    /// Step along the direction: the minimizer is `point + t · direction`.
    pub t: f64,

    /// Function value at the minimizer.
    pub value: f64,

    /// Directional derivative at the minimizer, scaled by the direction's length.
    ///
    /// Close to zero for an interior minimum; signed when the minimum sits on
    /// an end of the bracket.
    pub slope: f64,

    /// Status of the underlying golden section search.
    pub status: Status,

    /// Iterations used by the golden section search.
    pub steps: usize,
}

/// Minimizes `f` along `direction` from `point`, searching `t` within `bounds`.
///
/// A non-converged search is reported through [`LineMinimum::status`], as
/// with [`golden_section::minimize`].
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `point` and `direction` differ in length.
pub fn minimize_along<F, P, D>(
    f: &F,
    point: &P,
    direction: &D,
    bounds: [f64; 2],
    config: &Config,
) -> Result<LineMinimum, Error>
where
    F: Function,
    P: View + ?Sized,
    D: View + ?Sized,
{
    let line: Shifted<&P, &D> = shift_along(point, direction, 0.0)?;

    let along = |t: f64| f.call(&line.with_scale(t));
    let solution = minimize_unobserved(along, bounds, &config.search);

    let minimizer = line.with_scale(solution.x);
    let value = f.call(&minimizer);
    let slope = derive_by_direction(f, &minimizer, direction, &config.derivative)?;

    debug!(
        t = solution.x,
        value,
        slope,
        status = ?solution.status,
        steps = solution.steps,
        "line search"
    );
    Ok(LineMinimum {
        t: solution.x,
        value,
        slope,
        status: solution.status,
        steps: solution.steps,
    })
}
