/// A first trial step for the line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialStep {
    /// The trial step length.
    pub alpha: f64,

    /// Whether the line search may accept `alpha` right away if it already
    /// satisfies the Wolfe conditions.
    ///
    /// Set when `alpha` minimizes a convex quadratic fit of the line function,
    /// so it is likely a good step in its own right.
    pub may_terminate: bool,
}

impl InitialStep {
    /// Creates a trial step that the line search will always refine.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            may_terminate: false,
        }
    }
}
