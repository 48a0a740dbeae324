use linesearch_core::{Objective, Observer};

use super::{Action, Error, Event, bisect::bisect, bracket::Bracket, context::Context};

/// Folds the history entry `candidate` into the bracket (HZ update steps U0–U3).
///
/// A candidate outside the bracket changes nothing. Otherwise it replaces the
/// upper end if its slope is non-negative, the lower end if it descends below
/// the value limit, and in the remaining case it becomes the upper end of a
/// bisection that restores the bracket conditions.
pub(super) fn update<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    bracket: Bracket,
    candidate: usize,
) -> Result<Bracket, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let (lower, upper) = bracket.validate(ctx.history(), ctx.value_limit())?;
    let point = ctx.point(candidate);

    if point.alpha < lower.alpha || point.alpha > upper.alpha {
        return Ok(bracket);
    }
    if point.slope >= 0.0 {
        return Ok(Bracket::new(bracket.lower, candidate));
    }
    if point.value <= ctx.value_limit() {
        return Ok(Bracket::new(candidate, bracket.upper));
    }
    bisect(ctx, Bracket::new(bracket.lower, candidate))
}
