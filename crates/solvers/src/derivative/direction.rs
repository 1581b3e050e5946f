use minimize_core::{Function, View};
use tracing::trace;

use super::{Config, Error, shift::shift_along};

/// Returns the derivative of `f` at `point` along `direction`.
///
/// Lengths are checked once. Each stencil sample then evaluates `f` on the
/// lazy view `point + shift · direction`, so neither input is copied.
///
/// The result is scaled by the length of `direction`. Normalize `direction`
/// first to get the derivative with respect to a unit step.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `point` and `direction` differ in length.
pub fn derive_by_direction<F, P, D>(
    f: &F,
    point: &P,
    direction: &D,
    config: &Config,
) -> Result<f64, Error>
where
    F: Function,
    P: View + ?Sized,
    D: View + ?Sized,
{
    let line = shift_along(point, direction, 0.0)?;

    let stencil = config.stencil();
    let derivative = stencil.apply(config.step(), |shift| f.call(&line.with_scale(shift)));

    trace!(step = config.step(), ?stencil, derivative, "directional derivative");
    Ok(derivative)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use minimize_core::{LengthMismatch, scalar_mul};

    use crate::derivative::{Stencil, auto_grad};

    /// f(x, y) = x² + y⁴ − y².
    fn bowl(x: &dyn View) -> f64 {
        x.at(0).powi(2) + (x.at(1).powi(4) - x.at(1).powi(2))
    }

    #[test]
    fn matches_gradient_projection() {
        let config = Config::default();

        for point in [[1.0_f64, 1.0], [3.0, 2.0], [-0.5, 0.25]] {
            let gradient = auto_grad(&bowl, &point, &config);
            let expected = gradient.dot(&gradient).unwrap();

            let derivative = derive_by_direction(&bowl, &point, &gradient, &config).unwrap();

            assert_relative_eq!(derivative, expected, max_relative = 1e-4);
        }
    }

    #[test]
    fn coordinate_direction_gives_partial() {
        let point = [3.0_f64, 2.0];
        let config = Config::default();

        let along_x = derive_by_direction(&bowl, &point, &[1.0, 0.0], &config).unwrap();
        let along_y = derive_by_direction(&bowl, &point, &[0.0, 1.0], &config).unwrap();

        assert_relative_eq!(along_x, 6.0, max_relative = 1e-4);
        assert_relative_eq!(along_y, 28.0, max_relative = 1e-4);
    }

    #[test]
    fn scales_with_direction_length() {
        let point = [3.0_f64, 2.0];
        let config = Config::default();

        let unit = derive_by_direction(&bowl, &point, &[0.0, 1.0], &config).unwrap();
        let triple = derive_by_direction(&bowl, &point, &[0.0, 3.0], &config).unwrap();

        assert_relative_eq!(triple, 3.0 * unit, max_relative = 1e-4);
    }

    #[test]
    fn normalized_direction_gives_slope_per_unit_step() {
        let point = [3.0_f64, 2.0];
        let direction = [3.0_f64, 4.0];
        let unit = scalar_mul(1.0 / direction.norm(), &direction);
        let config = Config::default();

        let derivative = derive_by_direction(&bowl, &point, &unit, &config).unwrap();
        let raw = derive_by_direction(&bowl, &point, &direction, &config).unwrap();

        // 6 · 0.6 + 28 · 0.8
        assert_relative_eq!(derivative, 26.0, max_relative = 1e-4);
        assert_relative_eq!(raw, 5.0 * derivative, max_relative = 1e-4);
    }

    #[test]
    fn three_point_stencil_agrees() {
        let point = [3.0_f64, 2.0];
        let direction = [1.0_f64, 1.0];
        let config = Config::new(1e-6, Stencil::ThreePoint).unwrap();

        let derivative = derive_by_direction(&bowl, &point, &direction, &config).unwrap();

        assert_relative_eq!(derivative, 34.0, max_relative = 1e-4);
    }

    #[test]
    fn mismatched_direction_is_an_error() {
        let point = [3.0_f64, 2.0];
        let direction = [1.0_f64, 0.0, 0.0];

        let result = derive_by_direction(&bowl, &point, &direction, &Config::default());

        assert_eq!(
            result,
            Err(Error::LengthMismatch(LengthMismatch { left: 2, right: 3 }))
        );
    }
}
