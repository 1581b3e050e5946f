use std::cell::Cell;

use approx::assert_relative_eq;

use super::{
    Action, Config, ConfigError, Error, Event, INV_PHI, Status, maximize, maximize_unobserved,
    minimize, minimize_auto, minimize_unobserved,
};

/// f(x) = x²(x² − 5), minimized at x = √2.5 with f = −6.25.
fn quartic(x: f64) -> f64 {
    x * x * (x * x - 5.0)
}

/// f(x) = x³ − 4x.
fn polynomial(x: f64) -> f64 {
    x.powi(3) - 4.0 * x
}

#[test]
fn minimizes_quartic() {
    let config = Config::new(1024, 1e-8).unwrap();

    let solution = minimize_unobserved(quartic, [0.0, 100.0], &config);

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.width < 1e-8);
    assert_eq!(solution.steps, 48);
    assert_relative_eq!(solution.x, 2.5_f64.sqrt(), epsilon = 1e-6);
    assert_relative_eq!(solution.best.objective, -6.25, max_relative = 1e-10);
    assert_relative_eq!(quartic(solution.x), -6.25, max_relative = 1e-10);
}

#[test]
fn automatic_budget_matches_manual() {
    let manual = minimize_unobserved(quartic, [0.0, 100.0], &Config::new(1024, 1e-8).unwrap());

    let auto = minimize_auto(quartic, [0.0, 100.0], 1e-8).expect("should converge");

    assert_eq!(auto.status, Status::Converged);
    assert_eq!(auto.steps, manual.steps);
    assert_relative_eq!(auto.x, manual.x);
    assert_relative_eq!(auto.best.objective, -6.25, max_relative = 1e-10);
}

#[test]
fn automatic_budget_rejects_bad_inputs() {
    assert_eq!(
        minimize_auto(quartic, [0.0, 100.0], 0.0),
        Err(Error::Config(ConfigError::ZeroTolerance))
    );
    assert_eq!(
        minimize_auto(quartic, [0.0, f64::INFINITY], 1e-8),
        Err(Error::Config(ConfigError::Bounds))
    );
}

#[test]
fn divergence_error_reports_the_shortfall() {
    let error = Error::Diverged {
        steps: 3,
        width: 0.5,
        tol: 0.1,
    };

    assert_eq!(
        error.to_string(),
        "did not converge after 3 steps: width 0.5 is not below 0.1"
    );
}

#[test]
fn minimizes_polynomial() {
    // Local minimum at x = 2/sqrt(3) ≈ 1.1547.
    let expected_x = 2.0 / 3.0_f64.sqrt();

    let solution = minimize_unobserved(polynomial, [-2.0, 2.0], &Config::default());

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-6);
}

#[test]
fn maximizes_polynomial() {
    // Local maximum at x = -2/sqrt(3) ≈ -1.1547.
    let expected_x = -2.0 / 3.0_f64.sqrt();

    let solution = maximize_unobserved(polynomial, [-2.0, 2.0], &Config::default());

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected_x, epsilon = 1e-6);
    assert_relative_eq!(solution.best.objective, polynomial(expected_x), max_relative = 1e-10);
}

#[test]
fn reversed_bounds_are_swapped() {
    let forward = minimize_unobserved(quartic, [0.0, 5.0], &Config::default());
    let reversed = minimize_unobserved(quartic, [5.0, 0.0], &Config::default());

    assert_eq!(forward, reversed);
}

#[test]
fn exhausted_budget_is_a_soft_failure() {
    let config = Config::new(5, 1e-8).unwrap();

    let solution = minimize_unobserved(quartic, [0.0, 100.0], &config);

    assert_eq!(solution.status, Status::MaxSteps);
    assert!(!solution.is_converged());
    assert_eq!(solution.steps, 5);
    assert_relative_eq!(solution.width, 100.0 * INV_PHI.powi(5), max_relative = 1e-12);
}

#[test]
fn zero_budget_only_evaluates_interior_points() {
    let calls = Cell::new(0);
    let counting = |x: f64| {
        calls.set(calls.get() + 1);
        quartic(x)
    };

    let solution = minimize_unobserved(counting, [0.0, 100.0], &Config::new(0, 1e-8).unwrap());

    assert_eq!(calls.get(), 2);
    assert_eq!(solution.status, Status::MaxSteps);
    assert_eq!(solution.steps, 0);
    assert_relative_eq!(solution.width, 100.0);
}

#[test]
fn width_equal_to_tolerance_stops_without_converging() {
    let calls = Cell::new(0);
    let counting = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 0.3).powi(2)
    };

    let solution = minimize_unobserved(counting, [0.0, 1.0], &Config::new(10, 1.0).unwrap());

    assert_eq!(calls.get(), 2);
    assert_eq!(solution.status, Status::WidthAtTolerance);
    assert!(!solution.is_converged());
    assert_eq!(solution.steps, 0);
    assert_relative_eq!(solution.width, 1.0);
}

#[test]
fn automatic_budget_diverges_at_equal_width() {
    assert_eq!(
        minimize_auto(|x: f64| (x - 0.3).powi(2), [0.0, 1.0], 1.0),
        Err(Error::Diverged {
            steps: 0,
            width: 1.0,
            tol: 1.0,
        })
    );
}

#[test]
fn automatic_budget_rejects_overflowing_inputs() {
    assert_eq!(
        minimize_auto(quartic, [-1.0e308, 1.0e308], 1e-8),
        Err(Error::Config(ConfigError::Bounds))
    );
    assert_eq!(
        minimize_auto(quartic, [0.0, 1.0e10], 5e-324),
        Err(Error::Config(ConfigError::Budget))
    );
}

#[test]
fn narrow_bounds_converge_without_iterating() {
    let solution = minimize_unobserved(quartic, [1.0, 1.0], &Config::default());

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.steps, 0);
    assert_relative_eq!(solution.x, 1.0);
}

#[test]
fn one_evaluation_per_step() {
    let calls = Cell::new(0);
    let counting = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 1.0).powi(2)
    };

    for max_steps in [1, 7, 30, 200] {
        calls.set(0);
        let config = Config::new(max_steps, 1e-6).unwrap();
        let solution = minimize_unobserved(counting, [-3.0, 4.0], &config);

        assert_eq!(calls.get(), 2 + solution.steps);
    }
}

#[test]
fn events_follow_the_contraction() {
    let mut events = Vec::new();
    let observer = |event: &Event| {
        events.push(*event);
        None
    };

    let solution = minimize(quartic, [0.0, 10.0], &Config::new(12, 1e-8).unwrap(), observer);

    // One event from initialization, then one per step.
    assert_eq!(events.len(), solution.steps + 1);
    for (k, event) in (0_i32..).zip(&events) {
        assert_eq!(event.step, usize::try_from(k).unwrap());
        assert_relative_eq!(event.width, 10.0 * INV_PHI.powi(k), max_relative = 1e-12);
    }
}

#[test]
fn observer_can_stop_early() {
    let mut eval_count = 0;
    let observer = |_event: &Event| {
        eval_count += 1;
        if eval_count >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = minimize(polynomial, [0.0, 3.0], &Config::default(), observer);

    assert_eq!(solution.status, Status::StoppedByObserver);
    // 1 event for init right, 2 events for loop iterations = 3 total, stopped on 3rd.
    assert_eq!(solution.steps, 2);
    assert_eq!(eval_count, 3);
}

#[test]
fn stopping_at_init_keeps_the_first_point() {
    let observer = |_event: &Event| Some(Action::StopEarly);

    let solution = minimize(|x: f64| x, [0.0, 10.0], &Config::default(), observer);

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 0);
    assert_relative_eq!(solution.best.x, 3.819_660_1, epsilon = 1e-6);
}

#[test]
fn assume_worse_discards_from_best() {
    // For f(x) = x on [0, 10], minimum is at x=0.
    //
    // Init: left interior (~3.82) is evaluated without observer,
    //       right interior (~6.18) goes through observer (event 1).
    //       Best after init: left (~3.82).
    //
    // Step 1: left is better, so the bracket shrinks right.
    //         New left interior (~2.36) is evaluated (event 2).
    //         This point has better objective (2.36 < 3.82).
    //
    // If we mark step 1's point as AssumeWorse, it shouldn't become best.
    let mut event_count = 0;
    let observer = |_event: &Event| {
        event_count += 1;
        (event_count == 2).then_some(Action::AssumeWorse)
    };

    let config = Config::new(1, 1e-8).unwrap();

    let solution = minimize(|x: f64| x, [0.0, 10.0], &config, observer);

    assert_eq!(solution.status, Status::MaxSteps);
    assert_relative_eq!(solution.best.x, 3.819_660_1, epsilon = 1e-6);
    assert_relative_eq!(solution.best.objective, 3.819_660_1, epsilon = 1e-6);
}

#[test]
fn assume_worse_steers_away_from_true_minimum() {
    // For f(x) = (x - 5)² on [0, 10], true minimum is at x=5.
    // Marking every x > 4 as worse makes x = 4 the best reachable point.
    let observer = |event: &Event| (event.x() > 4.0).then_some(Action::AssumeWorse);

    let objective = |x: f64| (x - 5.0).powi(2);

    let solution = minimize(objective, [0.0, 10.0], &Config::default(), observer);

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.0, epsilon = 1e-6);
    assert!(solution.best.x <= 4.0);
}

#[test]
fn assume_worse_steers_maximization() {
    // For f(x) = -(x - 5)² on [0, 10], true maximum is at x=5.
    let observer = |event: &Event| (event.x() > 4.0).then_some(Action::AssumeWorse);

    let objective = |x: f64| -(x - 5.0).powi(2);

    let solution = maximize(objective, [0.0, 10.0], &Config::default(), observer);

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 4.0, epsilon = 1e-6);
    assert!(solution.best.x <= 4.0);
    assert!(solution.best.objective.is_finite());
}

#[test]
fn borrowed_objective_keeps_its_state() {
    let mut evaluations = Vec::new();
    let mut recording = |x: f64| {
        evaluations.push(x);
        quartic(x)
    };

    let solution = minimize_unobserved(&mut recording, [0.0, 5.0], &Config::default());

    assert_eq!(evaluations.len(), 2 + solution.steps);
    assert!(evaluations.iter().all(|x| (0.0..=5.0).contains(x)));
}
