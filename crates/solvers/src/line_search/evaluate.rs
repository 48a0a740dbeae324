use linesearch_core::{Objective, Ray};

/// Evaluates `phi(alpha)` and `phi'(alpha)` along the ray.
///
/// Writes `x + alpha * s` into `scratch`, evaluates the objective there, and
/// projects the gradient onto the direction. A non-finite value yields a `NaN`
/// slope whatever gradient the objective reported, so callers only need to
/// check one of the two for finiteness.
///
/// # Errors
///
/// Returns the objective's error if it cannot be evaluated.
pub fn evaluate_with_slope<const N: usize, O>(
    objective: &O,
    ray: &Ray<N>,
    alpha: f64,
    scratch: &mut [f64; N],
) -> Result<(f64, f64), O::Error>
where
    O: Objective<N>,
{
    ray.point_at(alpha, scratch);
    let (value, gradient) = objective.value_and_gradient(scratch)?;
    if !value.is_finite() {
        return Ok((value, f64::NAN));
    }
    Ok((value, ray.slope(&gradient)))
}

/// Evaluates `phi(alpha)` along the ray without a gradient.
///
/// # Errors
///
/// Returns the objective's error if it cannot be evaluated.
pub fn evaluate_value<const N: usize, O>(
    objective: &O,
    ray: &Ray<N>,
    alpha: f64,
    scratch: &mut [f64; N],
) -> Result<f64, O::Error>
where
    O: Objective<N>,
{
    ray.point_at(alpha, scratch);
    objective.value(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::line_search::testing::{Bowl, Scalar};

    #[test]
    fn slope_is_gradient_along_direction() {
        // f(x) = x0² + x1², restricted to x = (1, 1) + alpha * (-1, 0).
        let ray = Ray::new([1.0, 1.0], [-1.0, 0.0]);
        let mut scratch = [0.0; 2];

        let (value, slope) =
            evaluate_with_slope(&Bowl, &ray, 0.5, &mut scratch).expect("infallible");

        assert_eq!(scratch, [0.5, 1.0]);
        assert_relative_eq!(value, 1.25);
        assert_relative_eq!(slope, -1.0);
    }

    #[test]
    fn non_finite_value_masks_slope() {
        let wall = Scalar(|x: f64| if x > 1.0 { (f64::INFINITY, 3.0) } else { (x, 1.0) });
        let ray = Ray::new([0.0], [1.0]);
        let mut scratch = [0.0];

        let (value, slope) =
            evaluate_with_slope(&wall, &ray, 2.0, &mut scratch).expect("infallible");

        assert!(value.is_infinite());
        assert!(slope.is_nan());
    }

    #[test]
    fn value_only_reuses_scratch() {
        let ray = Ray::new([2.0, 0.0], [0.0, 3.0]);
        let mut scratch = [f64::NAN; 2];

        let value = evaluate_value(&Bowl, &ray, 1.0, &mut scratch).expect("infallible");

        assert_eq!(scratch, [2.0, 3.0]);
        assert_relative_eq!(value, 13.0);
    }
}
