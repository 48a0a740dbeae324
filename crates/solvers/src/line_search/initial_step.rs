//! Initial step estimation for the Hager–Zhang line search.
//!
//! Proposes the first trial step of each outer iteration of an optimizer,
//! following stages I0–I2 of Hager and Zhang (2006):
//!
//! - **No previous step** (I0): scale `psi0` by the size of the point and its
//!   gradient. This costs one gradient evaluation at the ray origin.
//! - **Previous step known** (I1–I2): fit a quadratic through `phi(0)`,
//!   `phi'(0)` and one value at `psi1 * previous`, and propose its minimizer
//!   when the fit is convex. The line search may accept that minimizer
//!   without bracketing, signalled by [`InitialStep::may_terminate`].
//!
//! A configured [`Config::alpha0`] stands in for a missing previous step.
//! Every proposal is clipped to [`Config::alpha_max`].
//!
//! Non-finite test values are counted in the caller's [`History`], which is
//! then handed to [`hager_zhang::search`] for the same ray.
//!
//! [`History`]: super::hager_zhang::History
//! [`hager_zhang::search`]: super::hager_zhang::search

mod config;
mod error;
mod event;
mod guess;
mod quadratic;
mod step;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use guess::from_gradient;
pub use step::InitialStep;

pub use super::Action;

use linesearch_core::{Objective, Observer, Ray};

use super::hager_zhang::History;

/// Estimates the first trial step along `ray`.
///
/// `previous` is the step accepted in the previous outer iteration, or
/// `None` on the first. `history` must start at the ray origin; its failure
/// count grows with each non-finite test value. The observer receives an
/// [`Event`] for each stage and the final [`Event::Chosen`].
///
/// # Errors
///
/// Returns an error if the origin is non-finite, if `previous` is not a
/// positive finite step, if a quadratic fit is requested along a direction
/// that is not a descent direction, or if the objective fails.
pub fn estimate<const N: usize, O, Obs>(
    objective: &O,
    ray: &Ray<N>,
    scratch: &mut [f64; N],
    history: &mut History,
    previous: Option<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<InitialStep, Error>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    let origin = history.origin();
    if !origin.is_finite() {
        return Err(Error::InvalidOrigin {
            value: origin.value,
            slope: origin.slope,
        });
    }

    let step = match previous.or(config.alpha0()) {
        Some(previous) if !(previous.is_finite() && previous > 0.0) => {
            return Err(Error::InvalidPreviousStep { alpha: previous });
        }
        Some(previous) => quadratic::from_previous(
            objective,
            ray,
            scratch,
            history,
            previous,
            config,
            &mut observer,
        )?,
        None => {
            let (value, gradient) = objective
                .value_and_gradient(ray.origin())
                .map_err(|error| Error::Objective(Box::new(error)))?;
            let alpha = from_gradient(ray.origin(), &gradient, value, config.psi0())
                .min(config.alpha_max());
            if let Some(action) = observer.observe(&Event::Guess { alpha }) {
                match action {}
            }
            InitialStep::new(alpha)
        }
    };

    if let Some(action) = observer.observe(&Event::Chosen { step }) {
        match action {}
    }
    Ok(step)
}

/// Estimates the first trial step without observer support.
///
/// This is a convenience wrapper around [`estimate`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`estimate`].
pub fn estimate_unobserved<const N: usize, O>(
    objective: &O,
    ray: &Ray<N>,
    scratch: &mut [f64; N],
    history: &mut History,
    previous: Option<f64>,
    config: &Config,
) -> Result<InitialStep, Error>
where
    O: Objective<N>,
{
    estimate(objective, ray, scratch, history, previous, config, ())
}
