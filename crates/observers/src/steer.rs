use minimize_core::Observer;

use crate::traits::{CanAssumeWorse, CanStopEarly, HasObjective, HasX};

/// Stops the solver once an evaluated objective is at or below a target.
///
/// Useful when any point that is good enough will do and the remaining
/// iterations would only refine it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtObjective {
    target: f64,
}

impl StopAtObjective {
    /// Creates an observer that stops at or below `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopAtObjective {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() <= self.target).then(A::stop_early)
    }
}

/// Treats every evaluation whose x matches a predicate as worse than the
/// other interior point, steering the search away from that region.
#[derive(Debug, Clone, Copy)]
pub struct Avoid<P> {
    region: P,
}

impl<P: FnMut(f64) -> bool> Avoid<P> {
    /// Creates an observer that avoids every x for which `region` is `true`.
    pub fn new(region: P) -> Self {
        Self { region }
    }
}

impl<E, A, P> Observer<E, A> for Avoid<P>
where
    E: HasX,
    A: CanAssumeWorse,
    P: FnMut(f64) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.region)(event.x()).then(A::assume_worse)
    }
}
