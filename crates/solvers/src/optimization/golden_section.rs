//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better point. One of the interior points always survives a shrink, so each
//! iteration costs exactly one new evaluation and contracts the bracket width
//! by [`INV_PHI`].
//!
//! The search contracts while the width is above the tolerance and the step
//! budget lasts. It has converged only if the final width is strictly below
//! the tolerance, so a width exactly equal to it stops the search as
//! [`Status::WidthAtTolerance`]. The reported `x` is the midpoint of the final
//! window on the better side of the bracket.
//!
//! # When to Use
//!
//! Golden section search is appropriate when:
//! - The objective function is unimodal (single optimum) on the bracket
//! - Derivative information is unavailable or expensive
//! - Function evaluations are relatively cheap
//!
//! # Budgets
//!
//! [`minimize`] and [`maximize`] run with a caller-chosen [`Config`] and report
//! an exhausted budget as [`Status::MaxSteps`]; the caller decides what to do
//! with the approximate answer. [`minimize_auto`] derives the exact budget for
//! a tolerance with [`Config::auto`] and returns [`Error::Diverged`] if the
//! search still fails to converge.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation after initialization. Each
//! event includes `other`, the other interior point. In golden section search,
//! this is always the current best. During **initialization**, the solver
//! evaluates two points but emits only one event (for the second point), since
//! the first has no `other` yet.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as worse than `other` (useful for
//! steering the search away from a region).
//!
//! ```
//! use minimize_solvers::optimization::golden_section::{Config, minimize_unobserved};
//!
//! let solution = minimize_unobserved(|x: f64| (x - 2.0).powi(2), [0.0, 5.0], &Config::default());
//!
//! assert!(solution.is_converged());
//! assert!((solution.x - 2.0).abs() < 1e-6);
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod init;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{INV_PHI, INV_PHI_SQ};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use minimize_core::Observer;

use search::search;

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// Reversed bounds are swapped. Running out of steps is not an error; check
/// [`Solution::status`].
pub fn minimize<F, Obs>(objective: F, bounds: [f64; 2], config: &Config, observer: Obs) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(objective, bounds, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
pub fn minimize_unobserved<F>(objective: F, bounds: [f64; 2], config: &Config) -> Solution
where
    F: FnMut(f64) -> f64,
{
    minimize(objective, bounds, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// The observer receives an [`Event`] for each evaluation after the first.
/// See the [module docs](self) for details on event timing and observer actions.
pub fn maximize<F, Obs>(objective: F, bounds: [f64; 2], config: &Config, observer: Obs) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    search(objective, bounds, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
pub fn maximize_unobserved<F>(objective: F, bounds: [f64; 2], config: &Config) -> Solution
where
    F: FnMut(f64) -> f64,
{
    maximize(objective, bounds, config, ())
}

/// Finds the minimum of the objective to within `tol`, deriving the step
/// budget from the bounds.
///
/// # Errors
///
/// Returns [`Error::Config`] if the bounds or tolerance are invalid (see
/// [`Config::auto`]), or [`Error::Diverged`] if the computed budget runs out
/// before the bracket is narrower than `tol`.
pub fn minimize_auto<F>(objective: F, bounds: [f64; 2], tol: f64) -> Result<Solution, Error>
where
    F: FnMut(f64) -> f64,
{
    let config = Config::auto(bounds, tol)?;
    let solution = minimize_unobserved(objective, bounds, &config);

    if solution.is_converged() {
        Ok(solution)
    } else {
        Err(Error::Diverged {
            steps: solution.steps,
            width: solution.width,
            tol,
        })
    }
}
