use super::bracket::GoldenBracket;
use super::solution::Status;
use super::{Config, Point, Solution};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

#[derive(Debug)]
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Point,
}

impl State {
    pub(super) fn new(bracket: GoldenBracket, left: Point, right: Point, best: Point) -> Self {
        Self {
            bracket,
            left,
            right,
            best,
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    pub(super) fn next_width(&self) -> f64 {
        self.bracket.next_width()
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    ///
    /// Ties shrink left, keeping `[inner_left, right]`.
    pub(super) fn next_action<T: Fn(f64) -> f64>(&self, transform: &T) -> ShrinkDirection {
        if self.left_is_better(transform) {
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        }
    }

    /// Apply shrink and update interior point with new evaluation.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                // [left, inner_right] becomes the bracket and the new point
                // takes the inner left slot
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                // [inner_left, right] becomes the bracket and the new point
                // takes the inner right slot
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    /// Update best if this point has better score. Only call with real evaluations.
    pub(super) fn maybe_update_best<T: Fn(f64) -> f64>(&mut self, point: &Point, transform: &T) {
        if transform(point.objective) < transform(self.best.objective) {
            self.best = *point;
        }
    }

    /// The search contracts only while the width is strictly above `tol`.
    pub(super) fn is_done(&self, config: &Config) -> bool {
        self.bracket.width <= config.tol()
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        config.tol() > self.bracket.width
    }

    /// Status for a search that stopped without observer intervention.
    pub(super) fn final_status(&self, config: &Config) -> Status {
        if self.is_converged(config) {
            Status::Converged
        } else if self.is_done(config) {
            Status::WidthAtTolerance
        } else {
            Status::MaxSteps
        }
    }

    pub(super) fn into_solution<T: Fn(f64) -> f64>(
        self,
        status: Status,
        steps: usize,
        transform: &T,
    ) -> Solution {
        let x = if self.left_is_better(transform) {
            self.bracket.left_window_mid()
        } else {
            self.bracket.right_window_mid()
        };

        Solution {
            status,
            x,
            best: self.best,
            steps,
            width: self.bracket.width,
        }
    }

    fn left_is_better<T: Fn(f64) -> f64>(&self, transform: &T) -> bool {
        transform(self.left.objective) < transform(self.right.objective)
    }
}
