use super::Point;

/// An evaluation reported by the golden section solver.
///
/// `other` is the interior point the new evaluation will be compared against.
/// In golden section search it is always the current best: the point the
/// solver would keep if it had to choose now. Observers can compare against
/// `other` to decide whether to stop early or steer the search with
/// [`Action::AssumeWorse`](super::Action::AssumeWorse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration that produced this evaluation, `0` during initialization.
    pub step: usize,

    /// The newly evaluated point.
    pub point: Point,

    /// The other interior point.
    pub other: Point,

    /// Bracket width once this evaluation is accepted.
    pub width: f64,
}

impl Event {
    /// Returns the x value that was evaluated.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }
}
