use std::error::Error as StdError;

use thiserror::Error;

use super::History;

/// Errors that can occur during a Hager–Zhang line search.
#[derive(Debug, Error)]
pub enum Error {
    /// The first history entry is not a finite point at `alpha = 0`.
    #[error("invalid ray origin: alpha = {alpha}, phi(0) = {value}, phi'(0) = {slope}")]
    InvalidOrigin { alpha: f64, value: f64, slope: f64 },

    /// The history already holds points from an earlier search.
    #[error("history must hold only the ray origin, found {len} entries")]
    StaleHistory { len: usize },

    /// The search direction does not point downhill.
    #[error("search direction is not a descent direction: phi'(0) = {slope}")]
    NotDescent { slope: f64 },

    /// The initial step is not in `(0, alpha_max]`.
    #[error("initial step must be positive and at most {alpha_max}, got {alpha}")]
    InvalidInitialStep { alpha: f64, alpha_max: f64 },

    /// The bracket slopes do not have the signs a descent direction implies.
    ///
    /// This usually means the gradient is inaccurate or inconsistent with
    /// the objective values.
    #[error(
        "bracket slopes are inconsistent with a descent direction \
         (phi'(a) = {slope_lower}, phi'(b) = {slope_upper}); check the gradient"
    )]
    InvalidDescentDirection { slope_lower: f64, slope_upper: f64 },

    /// A bracket failed its ordering or sign conditions.
    #[error("invalid bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },

    /// A step strictly inside a bracket evaluated to a non-finite value.
    #[error("non-finite evaluation at alpha = {alpha} inside the bracket")]
    NonFiniteInBracket { alpha: f64 },

    /// The iteration limit was reached without an acceptable step.
    ///
    /// `alpha` is the best lower-bound step found and `history` holds every
    /// point evaluated along the way.
    #[error("line search did not converge within {iters} iterations (best step {alpha})")]
    ConvergenceFailure {
        alpha: f64,
        iters: usize,
        history: History,
    },

    /// The objective returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}
