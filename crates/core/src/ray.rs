/// A half-line `x + alpha * s` through `N`-dimensional space.
///
/// `origin` is the current iterate `x` and `direction` is the search
/// direction `s`. A line search restricts an [`Objective`] to the ray,
/// turning it into the scalar function `phi(alpha) = f(x + alpha * s)` whose
/// derivative is `phi'(alpha) = grad f(x + alpha * s) · s`.
///
/// [`Objective`]: crate::Objective
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<const N: usize> {
    origin: [f64; N],
    direction: [f64; N],
}

impl<const N: usize> Ray<N> {
    /// Creates a ray from a point and a direction.
    #[must_use]
    pub fn new(origin: [f64; N], direction: [f64; N]) -> Self {
        Self { origin, direction }
    }

    /// Returns the ray's origin `x`.
    #[must_use]
    pub fn origin(&self) -> &[f64; N] {
        &self.origin
    }

    /// Returns the ray's direction `s`.
    #[must_use]
    pub fn direction(&self) -> &[f64; N] {
        &self.direction
    }

    /// Writes `x + alpha * s` into `out`, overwriting its contents.
    pub fn point_at(&self, alpha: f64, out: &mut [f64; N]) {
        for ((out, x), s) in out.iter_mut().zip(&self.origin).zip(&self.direction) {
            *out = x + alpha * s;
        }
    }

    /// Returns `x + alpha * s` as a new point.
    #[must_use]
    pub fn at(&self, alpha: f64) -> [f64; N] {
        let mut point = [0.0; N];
        self.point_at(alpha, &mut point);
        point
    }

    /// Projects a gradient onto the direction, giving the slope along the ray.
    #[must_use]
    pub fn slope(&self, gradient: &[f64; N]) -> f64 {
        gradient
            .iter()
            .zip(&self.direction)
            .map(|(g, s)| g * s)
            .sum()
    }
}
