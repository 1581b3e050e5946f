//! Numerical solvers built on lazy views.
//!
//! # Modules
//!
//! - [`derivative`]: finite-difference partial and directional derivatives,
//!   and full gradients, evaluated on perturbed views of the caller's point
//! - [`optimization`]: derivative-free 1-D minimization by golden section search
//! - [`line_search`]: golden section search along a direction from a point

pub mod derivative;
pub mod line_search;
pub mod optimization;
