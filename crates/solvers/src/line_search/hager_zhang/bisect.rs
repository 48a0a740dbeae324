use linesearch_core::{Objective, Observer};

use crate::line_search::float::ulp;

use super::{Action, Error, Event, bracket::Bracket, context::Context};

/// Shrinks a bracket whose upper end sits past a bump (HZ update step U3).
///
/// Requires a lower end with `phi' < 0` and `phi <= value_limit` and an upper
/// end with `phi' < 0` and `phi > value_limit`. Midpoints are evaluated until
/// one has `phi' >= 0`, which closes the bracket, or until the interval is one
/// ulp wide. Every midpoint must evaluate finite.
pub(super) fn bisect<const N: usize, O, Obs>(
    ctx: &mut Context<'_, N, O, Obs>,
    bracket: Bracket,
) -> Result<Bracket, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let (lower, upper) = bracket.validate(ctx.history(), ctx.value_limit())?;
    if upper.slope >= 0.0 {
        return Err(Error::InvalidBracket {
            lower: lower.alpha,
            upper: upper.alpha,
        });
    }
    ctx.emit(&Event::BisectionStarted { lower, upper });

    let mut bracket = bracket;
    let (mut a, mut b) = (lower.alpha, upper.alpha);
    while b - a > ulp(b) {
        let d = 0.5 * (a + b);
        let index = ctx.push_interior(d)?;
        let mid = ctx.point(index);

        if mid.slope >= 0.0 {
            bracket.upper = index;
            break;
        }
        if mid.value <= ctx.value_limit() {
            a = d;
            bracket.lower = index;
        } else {
            b = d;
            bracket.upper = index;
        }
    }

    let (lower, upper) = bracket.ends(ctx.history());
    ctx.emit(&Event::BisectionFinished { lower, upper });
    Ok(bracket)
}
