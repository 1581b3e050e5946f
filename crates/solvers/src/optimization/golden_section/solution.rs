use super::Point;

/// Indicates whether the solver converged or hit the step limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width fell below the tolerance.
    Converged,

    /// Reached the step limit without converging.
    MaxSteps,

    /// The bracket width reached the tolerance without falling strictly
    /// below it. Not converged.
    WidthAtTolerance,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the optimum x.
    ///
    /// This is the midpoint of the final window on the better side of the
    /// bracket, which is generally not an evaluated point.
    pub x: f64,

    /// Best point actually evaluated, excluding points an observer marked
    /// with [`Action::AssumeWorse`](super::Action::AssumeWorse).
    pub best: Point,

    /// Number of iterations performed. Each iteration evaluates the
    /// objective once, on top of the two evaluations made at startup.
    pub steps: usize,

    /// Bracket width when the solver finished.
    pub width: f64,
}

impl Solution {
    /// Returns `true` if the bracket width fell below the tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
