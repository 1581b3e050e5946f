use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during golden section search with an automatic budget.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// The computed step budget ran out before the bracket fell below `tol`.
    ///
    /// For a unimodal objective on finite bounds this cannot happen, so it
    /// points at an objective that is not unimodal on the bracket.
    #[error("did not converge after {steps} steps: width {width} is not below {tol}")]
    Diverged { steps: usize, width: f64, tol: f64 },
}
