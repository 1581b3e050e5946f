use minimize_core::Observer;

/// Records a copy of every event it observes and never acts.
///
/// Solvers take their observer by value, so pass `&mut recorder` to keep the
/// recording after the run.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E: Clone, A> Observer<E, A> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
