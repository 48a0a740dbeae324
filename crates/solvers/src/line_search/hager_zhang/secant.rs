use linesearch_core::{Objective, Observer};

use super::{Action, Error, Event, bracket::Bracket, context::Context, update::update};

/// Returns where the line through `(a, slope_a)` and `(b, slope_b)` crosses zero.
///
/// This is the secant step toward a root of `phi'`. Equal slopes give a
/// non-finite result.
#[must_use]
pub fn secant(a: f64, b: f64, slope_a: f64, slope_b: f64) -> f64 {
    (a * slope_b - b * slope_a) / (slope_b - slope_a)
}

/// Outcome of one double-secant step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Refinement {
    /// The history entry at this index satisfies the Wolfe conditions.
    Wolfe(usize),

    /// No Wolfe point yet; continue from this bracket.
    Bracket(Bracket),
}

/// Performs the double-secant step (HZ procedure S1–S4).
///
/// Takes a secant step on the bracket and folds the result in with
/// [`update`]. If that step replaced one end of the bracket, a second secant
/// step is taken between the replaced end and the new one, provided it lands
/// inside the updated bracket.
pub(super) fn secant2<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    bracket: Bracket,
) -> Result<Refinement, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let (lower, upper) = bracket.ends(ctx.history());
    if !(lower.slope < 0.0 && upper.slope >= 0.0) {
        return Err(Error::InvalidDescentDirection {
            slope_lower: lower.slope,
            slope_upper: upper.slope,
        });
    }
    ctx.emit(&Event::SecantStarted { lower, upper });

    let alpha = secant(lower.alpha, upper.alpha, lower.slope, upper.slope);
    if !alpha.is_finite() {
        return Err(Error::NonFiniteInBracket { alpha });
    }
    let first = ctx.push_interior(alpha)?;
    let c = ctx.point(first);
    if ctx.is_wolfe(&c) {
        return Ok(Refinement::Wolfe(first));
    }

    let mut next = update(ctx, bracket, first)?;

    let second = if next.upper == first {
        Some(secant(upper.alpha, c.alpha, upper.slope, c.slope))
    } else if next.lower == first {
        Some(secant(lower.alpha, c.alpha, lower.slope, c.slope))
    } else {
        None
    };

    let (new_lower, new_upper) = next.ends(ctx.history());
    if let Some(alpha) = second
        && new_lower.alpha <= alpha
        && alpha <= new_upper.alpha
    {
        let index = ctx.push_interior(alpha)?;
        if ctx.is_wolfe(&ctx.point(index)) {
            return Ok(Refinement::Wolfe(index));
        }
        next = update(ctx, next, index)?;
    }

    let (lower, upper) = next.ends(ctx.history());
    ctx.emit(&Event::SecantFinished { lower, upper });
    Ok(Refinement::Bracket(next))
}
