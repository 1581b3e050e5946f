//! Finite-difference derivatives over lazy views.
//!
//! Every entry point perturbs the caller's point through a view rather than a
//! copy: partial derivatives substitute one coordinate with
//! [`shift_axis`], directional derivatives add a scaled direction with
//! [`shift_along`]. The [`Stencil`] chosen in [`Config`] fixes both the sample
//! offsets and the weights applied to them.
//!
//! ```
//! use minimize_core::View;
//! use minimize_solvers::derivative::{Config, auto_grad};
//!
//! let bowl = |x: &dyn View| x.at(0).powi(2) + x.at(1).powi(4) - x.at(1).powi(2);
//! let gradient = auto_grad(&bowl, &[3.0, 2.0], &Config::default());
//!
//! assert!((gradient[0] - 6.0).abs() < 1e-4);
//! assert!((gradient[1] - 28.0).abs() < 1e-4);
//! ```

mod axis;
mod config;
mod direction;
mod error;
mod gradient;
mod shift;
mod stencil;

pub use axis::derive_by_axis;
pub use config::{Config, ConfigError};
pub use direction::derive_by_direction;
pub use error::Error;
pub use gradient::auto_grad;
pub use shift::{Shifted, shift_along, shift_axis};
pub use stencil::Stencil;
