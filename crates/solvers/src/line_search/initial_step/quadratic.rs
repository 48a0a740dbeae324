use linesearch_core::{Objective, Observer, Ray};

use crate::line_search::{
    Action, evaluate_value, float::MAX_FINITE_ATTEMPTS, hager_zhang::History,
};

use super::{Config, Error, Event, InitialStep};

/// Proposes a step from the previous one (HZ stages I1 and I2).
///
/// Evaluates `phi` at the test step `psi1 * previous`, shrinking by `psi3`
/// while it is non-finite, and fits a quadratic through `phi(0)`, `phi'(0)`
/// and the test value. A convex fit that did not rise above `phi(0)` gives
/// its minimizer, which the line search may accept outright. Otherwise the
/// test step is used if `phi` rose, and `psi2 * previous` if it fell.
pub(super) fn from_previous<const N: usize, O, Obs>(
    objective: &O,
    ray: &Ray<N>,
    scratch: &mut [f64; N],
    history: &mut History,
    previous: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<InitialStep, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let origin = history.origin();
    if origin.slope >= 0.0 {
        return Err(Error::NotDescent {
            slope: origin.slope,
        });
    }
    let alpha_max = config.alpha_max();

    let mut test_alpha = (config.psi1() * previous).min(alpha_max);
    let mut attempts = 1;
    let test_value = loop {
        let value = evaluate_value(objective, ray, test_alpha, scratch)
            .map_err(|error| Error::Objective(Box::new(error)))?;
        if value.is_finite() {
            break value;
        }

        let failures = history.record_failure();
        emit(observer, &Event::NonFinite {
            alpha: test_alpha,
            failures,
        });
        if attempts >= MAX_FINITE_ATTEMPTS {
            log::warn!("no finite value found below alpha = {test_alpha}; proposing alpha = 0");
            return Ok(InitialStep {
                alpha: 0.0,
                may_terminate: true,
            });
        }
        attempts += 1;
        test_alpha *= config.psi3();
    };
    emit(observer, &Event::Trial {
        alpha: test_alpha,
        value: test_value,
    });

    let curvature = ((test_value - origin.value) / test_alpha - origin.slope) / test_alpha;
    log::debug!(
        "quadratic fit: alpha = {test_alpha}, phi(0) = {}, phi'(0) = {}, phi = {test_value}, curvature = {curvature}",
        origin.value,
        origin.slope,
    );

    let step = if curvature.is_finite() && curvature > 0.0 && test_value <= origin.value {
        let minimizer = -origin.slope / (2.0 * curvature);
        emit(observer, &Event::Quadratic {
            curvature,
            alpha: minimizer,
        });
        if minimizer <= alpha_max {
            InitialStep {
                alpha: minimizer,
                may_terminate: true,
            }
        } else {
            InitialStep::new(alpha_max)
        }
    } else if test_value > origin.value {
        InitialStep::new(test_alpha)
    } else {
        let expanded = previous * config.psi2();
        emit(observer, &Event::Expanded { alpha: expanded });
        InitialStep::new(expanded)
    };

    Ok(InitialStep {
        alpha: step.alpha.min(alpha_max),
        ..step
    })
}

fn emit<Obs: Observer<Event, Action>>(observer: &mut Obs, event: &Event) {
    if let Some(action) = observer.observe(event) {
        match action {}
    }
}
