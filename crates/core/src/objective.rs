/// A differentiable scalar objective of `N` variables.
///
/// Line searches only ever look at an objective through this trait, so any
/// model, closure wrapper, or automatic-differentiation backend can drive them.
///
/// The const generic `N` is the number of variables.
///
/// # Non-finite values
///
/// Points outside the feasible region must be reported as a non-finite value
/// (`f64::INFINITY` or `f64::NAN`) inside `Ok`, not as an error. Solvers treat
/// non-finite values as data and shrink away from them. [`Self::Error`] is
/// reserved for genuine failures of the caller's code, which solvers propagate
/// without retrying.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at all.
    fn value(&self, x: &[f64; N]) -> Result<f64, Self::Error>;

    /// Evaluates the objective and its gradient at `x`.
    ///
    /// When the value is non-finite the gradient is ignored, so
    /// implementations may return any gradient in that case.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at all.
    fn value_and_gradient(&self, x: &[f64; N]) -> Result<(f64, [f64; N]), Self::Error>;
}
