use std::fmt;

use super::{Point, Status};

/// Events emitted by the Hager–Zhang line search.
///
/// Bracket events carry the end points as copies, so observers never hold
/// a borrow into the solver's history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A finite evaluation was appended to the history.
    Evaluated {
        /// Index of the new history entry.
        index: usize,

        /// The evaluated point.
        point: Point,
    },

    /// An evaluation returned a non-finite value or slope.
    NonFinite {
        /// The step that failed.
        alpha: f64,

        /// Running count of non-finite evaluations in this history.
        failures: usize,
    },

    /// Bracketing began from the given initial step.
    BracketingStarted {
        /// The initial step.
        alpha: f64,
    },

    /// Bracketing produced an interval holding a Wolfe point.
    Bracketed { lower: Point, upper: Point },

    /// A double-secant step began on the given bracket.
    SecantStarted { lower: Point, upper: Point },

    /// A double-secant step ended without a Wolfe point.
    SecantFinished { lower: Point, upper: Point },

    /// Bisection began on a bracket whose upper end sits past a bump.
    BisectionStarted { lower: Point, upper: Point },

    /// Bisection ended with the given bracket.
    BisectionFinished { lower: Point, upper: Point },

    /// The search finished and accepted a step.
    Accepted {
        /// The accepted point.
        point: Point,

        /// Why the search stopped.
        status: Status,
    },
}

impl Event {
    /// Returns the step this event refers to, if it refers to a single one.
    #[must_use]
    pub fn alpha(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } | Self::Accepted { point, .. } => Some(point.alpha),
            Self::NonFinite { alpha, .. } | Self::BracketingStarted { alpha } => Some(*alpha),
            _ => None,
        }
    }

    /// Returns the bracket this event refers to, if any.
    #[must_use]
    pub fn bracket(&self) -> Option<(Point, Point)> {
        match self {
            Self::Bracketed { lower, upper }
            | Self::SecantStarted { lower, upper }
            | Self::SecantFinished { lower, upper }
            | Self::BisectionStarted { lower, upper }
            | Self::BisectionFinished { lower, upper } => Some((*lower, *upper)),
            _ => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluated { index, point } => write!(
                f,
                "evaluated #{index}: alpha = {:e}, phi = {:e}, phi' = {:e}",
                point.alpha, point.value, point.slope
            ),
            Self::NonFinite { alpha, failures } => {
                write!(f, "non-finite at alpha = {alpha:e} (failure {failures})")
            }
            Self::BracketingStarted { alpha } => {
                write!(f, "bracketing from alpha = {alpha:e}")
            }
            Self::Bracketed { lower, upper } => {
                write!(f, "bracketed [{:e}, {:e}]", lower.alpha, upper.alpha)
            }
            Self::SecantStarted { lower, upper } => {
                write!(f, "secant2 on [{:e}, {:e}]", lower.alpha, upper.alpha)
            }
            Self::SecantFinished { lower, upper } => {
                write!(f, "secant2 left [{:e}, {:e}]", lower.alpha, upper.alpha)
            }
            Self::BisectionStarted { lower, upper } => {
                write!(f, "bisecting [{:e}, {:e}]", lower.alpha, upper.alpha)
            }
            Self::BisectionFinished { lower, upper } => {
                write!(f, "bisection left [{:e}, {:e}]", lower.alpha, upper.alpha)
            }
            Self::Accepted { point, status } => write!(
                f,
                "accepted alpha = {:e} ({status:?}): phi = {:e}, phi' = {:e}",
                point.alpha, point.value, point.slope
            ),
        }
    }
}
