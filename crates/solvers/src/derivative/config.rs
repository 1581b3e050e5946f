use thiserror::Error;

use super::Stencil;

/// Configuration for finite-difference derivatives.
///
/// The step `h` balances truncation error, which shrinks as `h^order`,
/// against round-off error, which grows as `1/h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step: f64,
    stencil: Stencil,
}

/// Errors that can occur when validating a derivative config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 1e-8,
            stencil: Stencil::FivePoint,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite, zero, or negative.
    pub fn new(step: f64, stencil: Stencil) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self { step, stencil })
    }

    /// Returns a copy of this config that uses `stencil`.
    #[must_use]
    pub fn with_stencil(self, stencil: Stencil) -> Self {
        Self { stencil, ..self }
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the stencil.
    #[must_use]
    pub fn stencil(&self) -> Stencil {
        self.stencil
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_point_at_1e_8() {
        let config = Config::default();

        assert_eq!(config.step(), 1e-8);
        assert_eq!(config.stencil(), Stencil::FivePoint);
    }

    #[test]
    fn rejects_bad_steps() {
        for step in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(
                Config::new(step, Stencil::ThreePoint),
                Err(ConfigError::Step)
            );
        }
    }

    #[test]
    fn with_stencil_keeps_the_step() {
        let config = Config::new(1e-5, Stencil::FivePoint)
            .unwrap()
            .with_stencil(Stencil::ThreePoint);

        assert_eq!(config.step(), 1e-5);
        assert_eq!(config.stencil(), Stencil::ThreePoint);
    }
}
