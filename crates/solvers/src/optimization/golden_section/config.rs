use thiserror::Error;
use tracing::debug;

use super::bracket::INV_PHI;

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_steps: usize,
    tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tolerance,

    #[error("tol must be positive to derive a step budget")]
    ZeroTolerance,

    #[error("bounds must be finite and their width representable")]
    Bounds,

    #[error("tol is too small relative to the bounds to derive a step budget")]
    Budget,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-8).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The search contracts while the bracket width is above `tol` and stops
    /// after at most `max_steps` iterations. It has converged only if the
    /// final width is strictly below `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_steps: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self { max_steps, tol })
    }

    /// Creates a config whose step budget is exactly enough for the bracket
    /// width to fall below `tol`.
    ///
    /// Each iteration scales the width by `1/φ`, so the budget is
    /// `floor(ln(tol / width) / ln(1/φ)) + 1`, or zero if the bounds are
    /// no wider than `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or their width
    /// overflows, if `tol` is zero, negative, or non-finite, or if
    /// `tol / width` underflows to zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn auto(bounds: [f64; 2], tol: f64) -> Result<Self, ConfigError> {
        let [a, b] = bounds;
        let width = (b - a).abs();
        if !width.is_finite() {
            return Err(ConfigError::Bounds);
        }
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        let max_steps = if width <= tol {
            0
        } else {
            let ratio = tol / width;
            if ratio == 0.0 {
                return Err(ConfigError::Budget);
            }
            // ratio is in (0, 1), so the quotient is finite and positive
            let exact = ratio.ln() / INV_PHI.ln();
            exact.floor() as usize + 1
        };

        debug!(width, tol, max_steps, "golden section step budget");
        Self::new(max_steps, tol)
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the bracket width tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}
