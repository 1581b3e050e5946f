//! Solvers for one-dimensional optimization problems.
//!
//! The objective is any `FnMut(f64) -> f64`. Solvers in this module search a
//! bounded interval for the `x` that minimizes or maximizes it.
//!
//! # Solvers
//!
//! - [`golden_section`]: derivative-free search over a bracketed interval for
//!   unimodal functions

pub mod golden_section;
