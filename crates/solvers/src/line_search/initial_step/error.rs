use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while estimating an initial step.
#[derive(Debug, Error)]
pub enum Error {
    /// The history's origin entry is not finite.
    #[error("invalid ray origin: phi(0) = {value}, phi'(0) = {slope}")]
    InvalidOrigin { value: f64, slope: f64 },

    /// The previous step is not a positive finite number.
    #[error("previous step must be positive and finite, got {alpha}")]
    InvalidPreviousStep { alpha: f64 },

    /// The search direction does not point downhill.
    #[error("search direction is not a descent direction: phi'(0) = {slope}")]
    NotDescent { slope: f64 },

    /// The objective returned an error.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}
