//! Steepest descent on the Rosenbrock function.
//!
//! Each outer iteration estimates an initial step, runs the Hager–Zhang line
//! search along the negative gradient, and prints the steps it tried.
//!
//! # Usage
//!
//! ```text
//! cargo run --example descent
//! cargo run --example descent -- 25
//! ```

use std::{convert::Infallible, error::Error};

use linesearch_core::{Objective, Ray};
use linesearch_observers::StepTrace;
use linesearch_solvers::line_search::{hager_zhang, initial_step};

/// The Rosenbrock function with `a = 1`, `b = 100`.
struct Rosenbrock;

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

fn main() -> Result<(), Box<dyn Error>> {
    let iters = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(10);

    let estimator = initial_step::Config::default();
    let config = hager_zhang::Config::default();

    let mut x = [-1.2, 1.0];
    let mut scratch = [0.0; 2];
    let mut previous = None;

    for iter in 0..iters {
        let (value, gradient) = Rosenbrock.value_and_gradient(&x)?;
        let ray = Ray::new(x, [-gradient[0], -gradient[1]]);
        let mut history = hager_zhang::History::at_origin(&Rosenbrock, &ray)?;

        let step = initial_step::estimate_unobserved(
            &Rosenbrock,
            &ray,
            &mut scratch,
            &mut history,
            previous,
            &estimator,
        )?;
        if step.alpha == 0.0 {
            println!("iter {iter:>3}: no finite trial step along the ray");
            break;
        }

        let mut trace = StepTrace::new();
        let solution = hager_zhang::search(
            &Rosenbrock,
            &ray,
            &mut scratch,
            &mut history,
            step,
            &config,
            &mut trace,
        )?;

        println!(
            "iter {iter:>3}: f = {value:>12.6e}, alpha = {:>10.4e} ({:?}, {} points, {} non-finite)",
            solution.alpha,
            solution.status,
            trace.points().len(),
            history.failures(),
        );

        if solution.alpha == 0.0 {
            break;
        }
        x = ray.at(solution.alpha);
        previous = Some(solution.alpha);
    }

    let value = Rosenbrock.value(&x)?;
    println!("x = [{:.6}, {:.6}], f = {value:.6e}", x[0], x[1]);
    Ok(())
}
