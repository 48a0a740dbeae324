//! Objectives shared by the line-search tests.

use std::convert::Infallible;

use linesearch_core::{Objective, Ray};

use super::hager_zhang::History;

/// A one-variable objective from a closure returning `(value, derivative)`.
pub(crate) struct Scalar<F>(pub(crate) F);

impl<F> Objective<1> for Scalar<F>
where
    F: Fn(f64) -> (f64, f64),
{
    type Error = Infallible;

    fn value(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok((self.0)(x[0]).0)
    }

    fn value_and_gradient(&self, x: &[f64; 1]) -> Result<(f64, [f64; 1]), Self::Error> {
        let (value, derivative) = (self.0)(x[0]);
        Ok((value, [derivative]))
    }
}

/// The bowl `f(x) = x0² + x1²`.
pub(crate) struct Bowl;

impl Objective<2> for Bowl {
    type Error = Infallible;

    fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(x[0] * x[0] + x[1] * x[1])
    }

    fn value_and_gradient(&self, x: &[f64; 2]) -> Result<(f64, [f64; 2]), Self::Error> {
        Ok((x[0] * x[0] + x[1] * x[1], [2.0 * x[0], 2.0 * x[1]]))
    }
}

/// The Rosenbrock function with `a = 1`, `b = 100`.
pub(crate) struct Rosenbrock;

impl Objective<2> for Rosenbrock {
    type Error = Infallible;

    fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok((1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2))
    }

    fn value_and_gradient(&self, x: &[f64; 2]) -> Result<(f64, [f64; 2]), Self::Error> {
        let value = self.value(x)?;
        let gradient = [
            -2.0 * (1.0 - x[0]) - 400.0 * (x[1] - x[0] * x[0]) * x[0],
            200.0 * (x[1] - x[0] * x[0]),
        ];
        Ok((value, gradient))
    }
}

/// The ray `0 + alpha * 1`, so that `alpha` is the objective's argument.
pub(crate) fn unit_ray() -> Ray<1> {
    Ray::new([0.0], [1.0])
}

/// A fresh history holding the objective's value and slope at the ray origin.
pub(crate) fn origin<const N: usize, O>(objective: &O, ray: &Ray<N>) -> History
where
    O: Objective<N, Error = Infallible>,
{
    match History::at_origin(objective, ray) {
        Ok(history) => history,
        Err(never) => match never {},
    }
}
