/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current estimate.
    StopEarly,

    /// Treat this point as having a worse objective than the other point.
    ///
    /// The solver shrinks the bracket away from this point, and the
    /// evaluation is not considered for the best point.
    ///
    /// Use this to steer the search away from a region the objective cannot
    /// describe well, for example where it returns `NaN`.
    AssumeWorse,
}
