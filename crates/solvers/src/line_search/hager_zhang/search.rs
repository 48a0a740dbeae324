use linesearch_core::{Objective, Observer, Ray};

use crate::line_search::{
    InitialStep,
    float::{next_up, ulp},
};

use super::{
    Action, Config, Error, Event, History, Point, Solution, Status,
    bracket::Bracket,
    context::Context,
    init::{self, Bracketing},
    secant::{Refinement, secant2},
    update::update,
};

/// Core Hager–Zhang search: checks, bracketing, then refinement.
pub(super) fn search<const N: usize, O, Obs>(
    objective: &O,
    ray: &Ray<N>,
    scratch: &mut [f64; N],
    history: &mut History,
    step: InitialStep,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let origin = check_origin(history)?;
    if origin.slope >= f64::EPSILON * origin.value.abs() {
        return Err(Error::NotDescent {
            slope: origin.slope,
        });
    }
    let valid_step = step.alpha.is_finite() && step.alpha > 0.0 && step.alpha <= config.alpha_max();
    if !valid_step {
        return Err(Error::InvalidInitialStep {
            alpha: step.alpha,
            alpha_max: config.alpha_max(),
        });
    }

    let mut ctx = Context::new(objective, ray, scratch, history, observer, config);

    // The slope is in [0, eps * |phi(0)|): flat to within rounding.
    if origin.slope >= 0.0 {
        return Ok(ctx.finish(Status::Stationary, 0, 0));
    }

    let (mut bracket, mut iters) = match init::bracket(&mut ctx, step, config)? {
        Bracketing::Found { bracket, iters } => (bracket, iters),
        Bracketing::Finished(solution) => return Ok(solution),
    };

    while iters < config.max_iters() {
        let (lower, upper) = ordered(&ctx, bracket)?;
        if upper.alpha - lower.alpha <= ulp(upper.alpha) {
            return Ok(ctx.finish(Status::Collapsed, bracket.lower, iters));
        }

        let next = match secant2(&mut ctx, bracket)? {
            Refinement::Wolfe(index) => return Ok(ctx.finish(Status::Wolfe, index, iters)),
            Refinement::Bracket(next) => next,
        };

        let (new_lower, new_upper) = ordered(&ctx, next)?;
        if new_upper.alpha - new_lower.alpha < config.gamma() * (upper.alpha - lower.alpha) {
            // Secant made progress. On a flat stretch it can keep shrinking
            // the bracket without changing any value, so stop there.
            if next_up(lower.value) >= upper.value && next_up(new_lower.value) >= new_upper.value {
                return Ok(ctx.finish(Status::Collapsed, next.lower, iters));
            }
            bracket = next;
        } else {
            let midpoint = ctx.push_interior(0.5 * (new_lower.alpha + new_upper.alpha))?;
            bracket = update(&mut ctx, next, midpoint)?;
        }

        iters += 1;
    }

    Err(ctx.convergence_failure(bracket.lower, iters))
}

/// Checks that the history holds only a finite origin at `alpha = 0`.
fn check_origin(history: &History) -> Result<Point, Error> {
    if history.len() != 1 {
        return Err(Error::StaleHistory {
            len: history.len(),
        });
    }

    let origin = history.origin();
    if origin.alpha != 0.0 || !origin.is_finite() {
        return Err(Error::InvalidOrigin {
            alpha: origin.alpha,
            value: origin.value,
            slope: origin.slope,
        });
    }
    Ok(origin)
}

fn ordered<const N: usize, O, Obs>(
    ctx: &Context<'_, N, O, Obs>,
    bracket: Bracket,
) -> Result<(Point, Point), Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let (lower, upper) = bracket.ends(ctx.history());
    if upper.alpha > lower.alpha {
        Ok((lower, upper))
    } else {
        Err(Error::InvalidBracket {
            lower: lower.alpha,
            upper: upper.alpha,
        })
    }
}
