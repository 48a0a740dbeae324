use super::Point;

/// Why the line search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The step satisfies the standard or approximate Wolfe conditions.
    Wolfe,

    /// The bracket collapsed to a single ulp, or stopped shrinking on a flat
    /// stretch of the line function. The lower end is returned.
    Collapsed,

    /// Expansion reached `alpha_max` while the function was still descending.
    AlphaMax,

    /// No further finite evaluation could be found. The last finite step
    /// is returned, which may be the origin.
    NonFinite,

    /// The origin slope is zero to within rounding, so the origin is returned.
    Stationary,
}

/// The result of a Hager–Zhang line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The accepted step length.
    pub alpha: f64,

    /// Objective value at the accepted step.
    pub value: f64,

    /// Directional derivative at the accepted step.
    pub slope: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, point: Point, iters: usize) -> Self {
        Self {
            status,
            alpha: point.alpha,
            value: point.value,
            slope: point.slope,
            iters,
        }
    }

    /// Returns the accepted step as a [`Point`].
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.alpha, self.value, self.slope)
    }
}
