use std::fmt;

use super::InitialStep;

/// Events emitted by the initial step estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// First iteration: a guess scaled from the point and its gradient.
    Guess { alpha: f64 },

    /// The test step of the quadratic fit evaluated finite.
    Trial { alpha: f64, value: f64 },

    /// The test step evaluated non-finite.
    NonFinite {
        /// The step that failed.
        alpha: f64,

        /// Running count of non-finite evaluations in the history.
        failures: usize,
    },

    /// The quadratic fit is convex; `alpha` is its minimizer.
    Quadratic { curvature: f64, alpha: f64 },

    /// The fit was unusable and the previous step was grown to `alpha`.
    Expanded { alpha: f64 },

    /// The estimate handed to the line search.
    Chosen { step: InitialStep },
}

impl Event {
    /// Returns the step this event refers to.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Guess { alpha }
            | Self::Trial { alpha, .. }
            | Self::NonFinite { alpha, .. }
            | Self::Quadratic { alpha, .. }
            | Self::Expanded { alpha } => *alpha,
            Self::Chosen { step } => step.alpha,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess { alpha } => write!(f, "first guess alpha = {alpha:e}"),
            Self::Trial { alpha, value } => {
                write!(f, "test step alpha = {alpha:e}: phi = {value:e}")
            }
            Self::NonFinite { alpha, failures } => {
                write!(f, "non-finite test step alpha = {alpha:e} (failure {failures})")
            }
            Self::Quadratic { curvature, alpha } => {
                write!(f, "quadratic fit: curvature = {curvature:e}, minimizer = {alpha:e}")
            }
            Self::Expanded { alpha } => write!(f, "expanded to alpha = {alpha:e}"),
            Self::Chosen { step } => write!(
                f,
                "initial step alpha = {:e} (may terminate: {})",
                step.alpha, step.may_terminate
            ),
        }
    }
}
