/// A step along the ray with its line-function value and slope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Step length from the ray origin.
    pub alpha: f64,

    /// Objective value `phi(alpha)`.
    pub value: f64,

    /// Directional derivative `phi'(alpha)`.
    pub slope: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(alpha: f64, value: f64, slope: f64) -> Self {
        Self {
            alpha,
            value,
            slope,
        }
    }

    /// Returns true if both the value and the slope are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.slope.is_finite()
    }
}
