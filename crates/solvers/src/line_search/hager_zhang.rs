//! Hager–Zhang line search.
//!
//! # Algorithm
//!
//! Given a ray `x + alpha * s` along which the objective initially decreases,
//! the search returns a step `alpha` satisfying either the standard Wolfe
//! conditions or the approximate Wolfe conditions of Hager and Zhang (2006).
//! The approximate conditions replace the sufficient-decrease test, which
//! fails to rounding error near a minimizer, with a slope test plus the cap
//! `phi(alpha) <= phi(0) + epsilon * |phi(0)|`.
//!
//! The search runs in two phases:
//!
//! 1. **Bracketing** grows the initial step by `rho` until it finds an
//!    interval certain to hold a Wolfe point. Non-finite trial steps are
//!    shrunk or bisected back toward the last finite one.
//! 2. **Refinement** alternates a double-secant step on `phi'` with bisection
//!    whenever the secant steps fail to shrink the bracket by `gamma`.
//!
//! # History
//!
//! Every finite evaluation is appended to a caller-owned [`History`], whose
//! entry `0` is the ray origin. The history is left in place after the search
//! returns (including on error), so the caller can inspect what was tried.
//! Each search needs a fresh history.
//!
//! # Observer Events
//!
//! The solver reports its progress as [`Event`]s. Its [`Action`] type is
//! uninhabited, so observers can watch but never steer.
//!
//! - [`Event::Evaluated`] / [`Event::NonFinite`]: one per evaluation
//! - [`Event::BracketingStarted`] / [`Event::Bracketed`]: the bracketing phase
//! - [`Event::SecantStarted`] / [`Event::SecantFinished`]: each double-secant step
//! - [`Event::BisectionStarted`] / [`Event::BisectionFinished`]: each bisection
//! - [`Event::Accepted`]: the returned step, emitted once on success

mod bisect;
mod bracket;
mod config;
mod context;
mod error;
mod event;
mod history;
mod init;
mod point;
mod search;
mod secant;
mod solution;
mod update;
mod wolfe;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use history::History;
pub use point::Point;
pub use secant::secant;
pub use solution::{Solution, Status};
pub use wolfe::{satisfies_wolfe, value_limit};

pub use super::Action;

use linesearch_core::{Objective, Observer, Ray};

use super::InitialStep;

/// Finds a step along `ray` satisfying the (approximate) Wolfe conditions.
///
/// `history` must hold only the ray origin, as built by [`History::new`] or
/// [`History::at_origin`]. `scratch` is overwritten with each trial point.
/// The observer receives an [`Event`] for each evaluation and phase change;
/// see the [module docs](self).
///
/// # Errors
///
/// Returns an error if the origin or initial step is unusable, if the
/// objective fails or turns non-finite inside a bracket, or if no acceptable
/// step is found within [`Config::max_iters`] iterations.
pub fn search<const N: usize, O, Obs>(
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
    search::search(objective, ray, scratch, history, step, config, observer)
}

/// Finds a step without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`search`].
pub fn search_unobserved<const N: usize, O>(
    objective: &O,
    ray: &Ray<N>,
    scratch: &mut [f64; N],
    history: &mut History,
    step: InitialStep,
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective<N>,
{
    search(objective, ray, scratch, history, step, config, ())
}
