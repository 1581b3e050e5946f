use minimize_core::Observer;
use tracing::{debug, trace};

use super::{
    Action, Config, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
    state::ShrinkDirection,
};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<F, Obs, T>(
    mut objective: F,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: T,
) -> Solution
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(bounds);
    debug!(
        left = bracket.left,
        right = bracket.right,
        max_steps = config.max_steps(),
        tol = config.tol(),
        "golden section search"
    );

    let mut state = match init(&mut objective, &bracket, &mut observer, &transform) {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(solution) => return finished(solution),
    };

    for step in 1..=config.max_steps() {
        if state.is_done(config) {
            let status = state.final_status(config);
            return finished(state.into_solution(status, step - 1, &transform));
        }

        let direction = state.next_action(&transform);
        let (x, other) = match direction {
            ShrinkDirection::ShrinkLeft(x) => (x, state.right()),
            ShrinkDirection::ShrinkRight(x) => (x, state.left()),
        };

        let point = Point::new(x, objective(x));
        let event = Event {
            step,
            point,
            other,
            width: state.next_width(),
        };
        trace!(step, x, objective = point.objective, width = event.width, "evaluated");

        match observer.observe(&event) {
            Some(Action::StopEarly) => {
                return finished(state.into_solution(Status::StoppedByObserver, step, &transform));
            }
            Some(Action::AssumeWorse) => {
                state.apply(direction, Point::new(x, transform(f64::INFINITY)));
            }
            None => {
                state.apply(direction, point);
                state.maybe_update_best(&point, &transform);
            }
        }
    }

    let status = state.final_status(config);
    finished(state.into_solution(status, config.max_steps(), &transform))
}

fn finished(solution: Solution) -> Solution {
    debug!(
        status = ?solution.status,
        x = solution.x,
        steps = solution.steps,
        width = solution.width,
        "golden section search finished"
    );
    solution
}
