use linesearch_core::{Objective, Observer};

use crate::line_search::{
    InitialStep,
    float::{MAX_FINITE_ATTEMPTS, next_up},
};

use super::{
    Action, Config, Error, Event, Point, Solution, Status, bisect::bisect, bracket::Bracket,
    context::Context,
};

/// Result of the bracketing phase.
pub(super) enum Bracketing {
    /// A bracket was found after `iters` iterations.
    Found { bracket: Bracket, iters: usize },

    /// The search ended during bracketing.
    Finished(Solution),
}

/// Finds a bracket starting from the initial step (HZ bracket steps B0–B3).
///
/// The first trial step is shrunk by `psi3` while it evaluates non-finite.
/// From there the step grows by `rho` until the slope turns upward, or the
/// value rises above the limit (in which case [`bisect`] recovers a bracket).
/// Growth stops early at `alpha_max`, and a non-finite step during growth
/// lowers a local copy of `alpha_max` and retries halfway back.
pub(super) fn bracket<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    step: InitialStep,
    config: &Config,
) -> Result<Bracketing, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    ctx.emit(&Event::BracketingStarted { alpha: step.alpha });

    let Some(first) = first_finite(ctx, step.alpha, config.psi3())? else {
        log::warn!(
            "no finite evaluation found below alpha = {}; returning the ray origin",
            step.alpha
        );
        return Ok(Bracketing::Finished(ctx.finish(Status::NonFinite, 0, 0)));
    };
    let mut last = ctx.push(first);

    // A shrunk step is no longer the estimator's proposal.
    let may_terminate = step.may_terminate && first.alpha >= step.alpha;
    if may_terminate && ctx.is_wolfe(&first) {
        return Ok(Bracketing::Finished(ctx.finish(Status::Wolfe, last, 0)));
    }

    let mut alpha_max = config.alpha_max();
    let mut iters = 1;
    while iters < config.max_iters() {
        let current = ctx.point(last);

        if current.slope >= 0.0 {
            // The most recent earlier point below the limit closes the bracket.
            let lower = (0..last)
                .rev()
                .find(|&index| ctx.point(index).value <= ctx.value_limit())
                .unwrap_or(0);
            return Ok(found(ctx, Bracket::new(lower, last), iters));
        }

        if current.value > ctx.value_limit() {
            let bracket = bisect(ctx, Bracket::new(0, last))?;
            return Ok(found(ctx, bracket, iters));
        }

        if next_up(current.alpha) >= alpha_max {
            return Ok(Bracketing::Finished(ctx.finish(Status::AlphaMax, last, iters)));
        }

        let Some(point) = expand(ctx, current.alpha, &mut alpha_max, config.rho())? else {
            log::warn!(
                "no finite evaluation found beyond alpha = {}; returning it",
                current.alpha
            );
            return Ok(Bracketing::Finished(ctx.finish(Status::NonFinite, last, iters)));
        };
        last = ctx.push(point);

        if point.slope < 0.0 && point.alpha >= alpha_max {
            log::warn!("still descending at alpha_max = {alpha_max}; returning it");
            return Ok(Bracketing::Finished(ctx.finish(Status::AlphaMax, last, iters)));
        }

        iters += 1;
    }

    Err(ctx.convergence_failure(last, iters))
}

fn found<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    bracket: Bracket,
    iters: usize,
) -> Bracketing
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let (lower, upper) = bracket.ends(ctx.history());
    ctx.emit(&Event::Bracketed { lower, upper });
    Bracketing::Found { bracket, iters }
}

/// Evaluates at `alpha`, shrinking by `psi3` after each non-finite result.
fn first_finite<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    alpha: f64,
    psi3: f64,
) -> Result<Option<Point>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let mut alpha = alpha;
    let mut point = ctx.evaluate(alpha)?;
    let mut attempts = 1;
    while !point.is_finite() && attempts < MAX_FINITE_ATTEMPTS {
        attempts += 1;
        alpha *= psi3;
        point = ctx.evaluate(alpha)?;
    }
    Ok(point.is_finite().then_some(point))
}

/// Tries the step `rho * previous`, clipped to `alpha_max`.
///
/// While the trial is non-finite, `alpha_max` drops to the failed step and
/// the trial moves halfway back toward `previous`.
fn expand<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    previous: f64,
    alpha_max: &mut f64,
    rho: f64,
) -> Result<Option<Point>, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let mut alpha = (previous * rho).min(*alpha_max);
    let mut point = ctx.evaluate(alpha)?;
    let mut attempts = 1;
    while !point.is_finite() && alpha > next_up(previous) && attempts < MAX_FINITE_ATTEMPTS {
        *alpha_max = alpha;
        attempts += 1;
        alpha = 0.5 * (previous + alpha);
        point = ctx.evaluate(alpha)?;
    }
    Ok(point.is_finite().then_some(point))
}
