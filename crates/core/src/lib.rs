//! Core traits and types for lazy numeric views.
//!
//! This crate defines the shared abstractions that the derivative and
//! line-search solvers build on:
//!
//! - [`View`]: a sized, indexable, read-only sequence of `f64`
//! - [`ConstView`], [`SubstitutionView`], [`BroadcastView`], [`BinaryOpView`]:
//!   the view variants, composed by nesting rather than by copying data
//! - [`Function`]: a scalar function that accepts any view
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Views never own or copy the sequence they describe. Perturbing a point for
//! a finite-difference stencil is a matter of wrapping it:
//!
//! ```
//! use minimize_core::{SubstitutionView, View};
//!
//! let point = [1.0, 2.0, 3.0];
//! let shifted = SubstitutionView::new(&point, 1, 2.5);
//!
//! assert_eq!(shifted.to_vec(), vec![1.0, 2.5, 3.0]);
//! assert_eq!(point, [1.0, 2.0, 3.0]);
//! ```

mod error;
mod function;
mod observer;
pub mod view;

pub use error::LengthMismatch;
pub use function::Function;
pub use observer::Observer;
pub use view::{
    BinaryOp, BinaryOpView, BroadcastView, ConstView, Difference, Iter, Product,
    SubstitutionView, Sum, View, difference, product, scalar_add, scalar_mul, sum,
};
