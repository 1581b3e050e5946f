//! Reusable observers for minimize solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose events and actions implement them.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasX`], [`HasWidth`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`Recorder`]: keeps a copy of every event
//! - [`TraceObserver`]: forwards every event to `tracing`
//! - [`StopAtObjective`]: stops once an objective reaches a target
//! - [`Avoid`]: steers the search away from a region of x
//!
//! Observers compose by reference, so a caller can record a run and keep the
//! recording afterwards:
//!
//! ```
//! use minimize_observers::Recorder;
//! use minimize_solvers::optimization::golden_section::{Config, Event, minimize};
//!
//! let mut recorder = Recorder::<Event>::new();
//! let objective = |x: f64| (x - 1.0).powi(2);
//! let solution = minimize(objective, [0.0, 4.0], &Config::default(), &mut recorder);
//!
//! assert_eq!(recorder.len(), solution.steps + 1);
//! ```
//!
//! [`Observer`]: minimize_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasX`]: traits::HasX
//! [`HasWidth`]: traits::HasWidth
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod recorder;
mod steer;
mod trace;

pub use recorder::Recorder;
pub use steer::{Avoid, StopAtObjective};
pub use trace::TraceObserver;
