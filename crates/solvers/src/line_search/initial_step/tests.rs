use std::cell::Cell;

use approx::assert_relative_eq;
use linesearch_core::Ray;

use crate::line_search::{
    hager_zhang::{self, History},
    testing::{Bowl, Rosenbrock, Scalar, origin, unit_ray},
};

use super::{Action, Config, Error, Event, InitialStep, estimate, estimate_unobserved};

fn parabola(x: f64) -> (f64, f64) {
    ((x - 2.0).powi(2), 2.0 * (x - 2.0))
}

#[test]
fn first_iteration_scales_by_the_gradient() {
    // Bowl at (1, 2) along -g = (-2, -4): psi0 * max|x| / max|g| = 0.01 * 2 / 4.
    let ray = Ray::new([1.0, 2.0], [-2.0, -4.0]);
    let mut scratch = [0.0; 2];
    let mut history = origin(&Bowl, &ray);
    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let step = estimate(
        &Bowl,
        &ray,
        &mut scratch,
        &mut history,
        None,
        &Config::default(),
        observer,
    )
    .expect("infallible");

    assert_relative_eq!(step.alpha, 0.005);
    assert!(!step.may_terminate);
    assert!(matches!(events[..], [Event::Guess { .. }, Event::Chosen { .. }]));
}

#[test]
fn first_iteration_at_the_zero_point() {
    // Rosenbrock at the zero point: f = 1, g = (-2, 0).
    let ray = Ray::new([0.0, 0.0], [2.0, 0.0]);
    let mut scratch = [0.0; 2];
    let mut history = origin(&Rosenbrock, &ray);

    let step = estimate_unobserved(
        &Rosenbrock,
        &ray,
        &mut scratch,
        &mut history,
        None,
        &Config::default(),
    )
    .expect("infallible");

    assert!(step.alpha.is_finite() && step.alpha > 0.0);
    assert_relative_eq!(step.alpha, 0.005);
}

#[test]
fn convex_fit_gives_its_minimizer() {
    // Test step 0.2 on (alpha - 2)² fits exactly, with minimizer 2.
    let objective = Scalar(parabola);
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    )
    .expect("infallible");

    assert_relative_eq!(step.alpha, 2.0, epsilon = 1e-9);
    assert!(step.may_terminate);
    assert_eq!(history.len(), 1);
}

#[test]
fn convex_fit_is_clipped_to_alpha_max() {
    let objective = Scalar(parabola);
    let ray = unit_ray();
    let config = Config::default().with_alpha_max(1.5).expect("valid");
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(&objective, &ray, &mut scratch, &mut history, Some(1.0), &config)
        .expect("infallible");

    assert_eq!(step, InitialStep::new(1.5));
}

#[test]
fn concave_fit_expands_the_previous_step() {
    // phi = -alpha - alpha² curves downward, so the fit has no minimizer.
    let objective = Scalar(|x: f64| (-x - x * x, -1.0 - 2.0 * x));
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);
    let mut expanded = None;
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Expanded { alpha } = event {
            expanded = Some(*alpha);
        }
        None
    };

    let step = estimate(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
        observer,
    )
    .expect("infallible");

    assert_eq!(step, InitialStep::new(2.0));
    assert_eq!(expanded, Some(2.0));
}

#[test]
fn rising_test_value_falls_back_to_test_step() {
    // phi = -alpha + 10 alpha² is already above phi(0) at the test step 0.2.
    let objective = Scalar(|x: f64| (-x + 10.0 * x * x, -1.0 + 20.0 * x));
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    )
    .expect("infallible");

    assert_relative_eq!(step.alpha, 0.2);
    assert!(!step.may_terminate);
}

#[test]
fn non_finite_test_step_is_shrunk_and_counted() {
    let objective = Scalar(|x: f64| if x > 0.1 { (f64::INFINITY, 0.0) } else { parabola(x) });
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    )
    .expect("infallible");

    assert_eq!(history.failures(), 1);
    assert_relative_eq!(step.alpha, 2.0, epsilon = 1e-9);
    assert!(step.may_terminate);
}

#[test]
fn gives_up_after_repeated_non_finite_values() {
    let objective = Scalar(|x: f64| if x > 0.0 { (f64::NAN, 0.0) } else { (1.0, -1.0) });
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    )
    .expect("infallible");

    assert_eq!(
        step,
        InitialStep {
            alpha: 0.0,
            may_terminate: true,
        }
    );
    assert_eq!(history.failures(), 52);
}

#[test]
fn configured_alpha0_replaces_missing_previous_step() {
    let objective = Scalar(parabola);
    let ray = unit_ray();
    let config = Config::default().with_alpha0(1.0).expect("valid");
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);
    let mut guessed = false;
    let observer = |event: &Event| -> Option<Action> {
        guessed |= matches!(event, Event::Guess { .. });
        None
    };

    let step = estimate(&objective, &ray, &mut scratch, &mut history, None, &config, observer)
        .expect("infallible");

    assert!(!guessed);
    assert!(step.may_terminate);
    assert_relative_eq!(step.alpha, 2.0, epsilon = 1e-9);
}

#[test]
fn rejects_non_finite_origin() {
    let objective = Scalar(parabola);
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = History::new(f64::INFINITY, -1.0);

    let result = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::InvalidOrigin { .. })));
}

#[test]
fn rejects_invalid_previous_step() {
    let evaluations = Cell::new(0);
    let objective = Scalar(|x: f64| {
        evaluations.set(evaluations.get() + 1);
        parabola(x)
    });
    let ray = unit_ray();
    let mut scratch = [0.0];
    let config = Config::default().with_alpha_max(10.0).expect("valid");

    for previous in [f64::NAN, 0.0, -1.0, f64::INFINITY] {
        let mut history = origin(&objective, &ray);
        evaluations.set(0);

        let result = estimate_unobserved(
            &objective,
            &ray,
            &mut scratch,
            &mut history,
            Some(previous),
            &config,
        );

        assert!(
            matches!(result, Err(Error::InvalidPreviousStep { alpha })
                if alpha.to_bits() == previous.to_bits()),
            "previous = {previous}: {result:?}"
        );
        assert_eq!(evaluations.get(), 0);
    }
}

#[test]
fn quadratic_fit_needs_a_descent_direction() {
    let objective = Scalar(parabola);
    let ray = Ray::new([0.0], [-1.0]);
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let result = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    );

    assert!(matches!(result, Err(Error::NotDescent { slope }) if slope > 0.0));
}

#[test]
fn feeds_the_line_search() {
    let objective = Scalar(parabola);
    let ray = unit_ray();
    let mut scratch = [0.0];
    let mut history = origin(&objective, &ray);

    let step = estimate_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        Some(1.0),
        &Config::default(),
    )
    .expect("infallible");
    let solution = hager_zhang::search_unobserved(
        &objective,
        &ray,
        &mut scratch,
        &mut history,
        step,
        &hager_zhang::Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, hager_zhang::Status::Wolfe);
    assert_eq!(solution.iters, 0);
    assert_relative_eq!(solution.alpha, 2.0, epsilon = 1e-9);
}
