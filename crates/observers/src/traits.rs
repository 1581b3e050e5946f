//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasX`]: events that carry the evaluated x
//! - [`HasWidth`]: events that carry the current bracket width
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//! - [`CanAssumeWorse`]: actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use minimize_core::Observer;
//! use minimize_observers::traits::{CanStopEarly, HasWidth};
//!
//! struct NarrowEnough {
//!     width: f64,
//! }
//!
//! impl<E: HasWidth, A: CanStopEarly> Observer<E, A> for NarrowEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.width() < self.width).then(A::stop_early)
//!     }
//! }
//! ```

use minimize_solvers::optimization::golden_section;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries the x at which the objective was evaluated.
pub trait HasX {
    /// Returns the evaluated x for this event.
    fn x(&self) -> f64;
}

/// An event that carries the width of a shrinking bracket.
pub trait HasWidth {
    /// Returns the bracket width for this event.
    fn width(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as worse than the other.
    fn assume_worse() -> Self;
}

// --- Event traits for golden_section::Event ---

impl HasObjective for golden_section::Event {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

impl HasX for golden_section::Event {
    fn x(&self) -> f64 {
        self.point.x
    }
}

impl HasWidth for golden_section::Event {
    fn width(&self) -> f64 {
        self.width
    }
}

// --- Action traits for golden_section::Action ---

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for golden_section::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}
