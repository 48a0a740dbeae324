use super::Point;

/// Returns the largest value a point may have and still count as descent.
///
/// This is `phi(0) + epsilon * |phi(0)|`, the slack that lets the
/// approximate Wolfe test accept points whose decrease is lost in rounding.
#[must_use]
pub fn value_limit(origin_value: f64, epsilon: f64) -> f64 {
    origin_value + epsilon * origin_value.abs()
}

/// Checks whether `point` satisfies the Wolfe conditions.
///
/// The point is accepted if either test holds:
///
/// - **Standard**: `delta * phi'(0) >= (phi(c) - phi(0)) / c` and
///   `phi'(c) >= sigma * phi'(0)`
/// - **Approximate**: `(2 * delta - 1) * phi'(0) >= phi'(c) >= sigma * phi'(0)`
///   and `phi(c) <= value_limit`
///
/// The check is pure: it evaluates nothing and may be repeated freely.
#[must_use]
pub fn satisfies_wolfe(
    point: &Point,
    origin: &Point,
    value_limit: f64,
    delta: f64,
    sigma: f64,
) -> bool {
    let curvature = point.slope >= sigma * origin.slope;
    if !curvature {
        return false;
    }

    let sufficient_decrease = delta * origin.slope >= (point.value - origin.value) / point.alpha;
    let approximate =
        (2.0 * delta - 1.0) * origin.slope >= point.slope && point.value <= value_limit;

    sufficient_decrease || approximate
}
