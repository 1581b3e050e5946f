/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch or steer a search without changing its API:
/// tracing each step, stopping once a result is good enough, or pushing the
/// search away from a region.
///
/// `observe` returns `Option<A>`. `Some(action)` requests a solver-specific
/// action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
