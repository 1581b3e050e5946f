use minimize_core::Observer;
use tracing::trace;

use super::{Action, Event, Point, Solution, bracket::GoldenBracket, solution::Status, state::State};

pub(super) enum InitResult {
    Continue(State),
    StopEarly(Solution),
}

/// Initialize state by evaluating both interior points.
///
/// Only the second point triggers an observer event, since the first has no
/// `other` to be compared against yet.
pub(super) fn init<F, Obs, T>(
    objective: &mut F,
    bracket: &GoldenBracket,
    observer: &mut Obs,
    transform: &T,
) -> InitResult
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let left = Point::new(bracket.inner_left, objective(bracket.inner_left));
    let right = Point::new(bracket.inner_right, objective(bracket.inner_right));
    trace!(?left, ?right, "initial interior points");

    let event = Event {
        step: 0,
        point: right,
        other: left,
        width: bracket.width,
    };

    match observer.observe(&event) {
        Some(Action::StopEarly) => {
            let state = State::new(*bracket, left, right, left);
            InitResult::StopEarly(state.into_solution(Status::StoppedByObserver, 0, transform))
        }
        Some(Action::AssumeWorse) => {
            let worse = Point::new(right.x, transform(f64::INFINITY));
            InitResult::Continue(State::new(*bracket, left, worse, left))
        }
        None => {
            let best = if transform(left.objective) <= transform(right.objective) {
                left
            } else {
                right
            };
            InitResult::Continue(State::new(*bracket, left, right, best))
        }
    }
}
