use linesearch_core::{Objective, Observer, Ray};

use crate::line_search::evaluate_with_slope;

use super::{
    Action, Config, Error, Event, History, Point, Solution, Status,
    wolfe::{satisfies_wolfe, value_limit},
};

/// Everything one search needs to evaluate, record, and report points.
pub(super) struct Context<'ctx, const N: usize, O, Obs> {
    objective: &'ctx O,
    ray: &'ctx Ray<N>,
    scratch: &'ctx mut [f64; N],
    history: &'ctx mut History,
    observer: Obs,
    origin: Point,
    value_limit: f64,
    delta: f64,
    sigma: f64,
}

impl<'ctx, const N: usize, O, Obs> Context<'ctx, N, O, Obs>
where
    O: Objective<N>,
    Obs: Observer<Event, Action>,
{
    pub(super) fn new(
        objective: &'ctx O,
        ray: &'ctx Ray<N>,
        scratch: &'ctx mut [f64; N],
        history: &'ctx mut History,
        observer: Obs,
        config: &Config,
    ) -> Self {
        let origin = history.origin();
        Self {
            objective,
            ray,
            scratch,
            history,
            observer,
            origin,
            value_limit: value_limit(origin.value, config.epsilon()),
            delta: config.delta(),
            sigma: config.sigma(),
        }
    }

    /// Evaluates the line function at `alpha` without storing the result.
    ///
    /// A non-finite result is counted as a failure and reported to the observer.
    pub(super) fn evaluate(&mut self, alpha: f64) -> Result<Point, Error> {
        let (value, slope) = evaluate_with_slope(self.objective, self.ray, alpha, self.scratch)
            .map_err(|error| Error::Objective(Box::new(error)))?;

        let point = Point::new(alpha, value, slope);
        if !point.is_finite() {
            let failures = self.history.record_failure();
            self.emit(&Event::NonFinite { alpha, failures });
        }
        Ok(point)
    }

    /// Appends a finite point to the history and returns its index.
    pub(super) fn push(&mut self, point: Point) -> usize {
        let index = self.history.push(point);
        self.emit(&Event::Evaluated { index, point });
        index
    }

    /// Evaluates and stores a step inside a certified bracket.
    ///
    /// Such a step must evaluate finite; anything else is an error.
    pub(super) fn push_interior(&mut self, alpha: f64) -> Result<usize, Error> {
        let point = self.evaluate(alpha)?;
        if !point.is_finite() {
            return Err(Error::NonFiniteInBracket { alpha });
        }
        Ok(self.push(point))
    }

    pub(super) fn point(&self, index: usize) -> Point {
        self.history[index]
    }

    pub(super) fn history(&self) -> &History {
        self.history
    }

    pub(super) fn value_limit(&self) -> f64 {
        self.value_limit
    }

    pub(super) fn is_wolfe(&self, point: &Point) -> bool {
        satisfies_wolfe(point, &self.origin, self.value_limit, self.delta, self.sigma)
    }

    pub(super) fn emit(&mut self, event: &Event) {
        if let Some(action) = self.observer.observe(event) {
            match action {}
        }
    }

    /// Accepts the history entry at `index` and builds the solution.
    pub(super) fn finish(&mut self, status: Status, index: usize, iters: usize) -> Solution {
        let point = self.point(index);
        self.emit(&Event::Accepted { point, status });
        Solution::new(status, point, iters)
    }

    /// Builds the error returned when the iteration limit runs out.
    pub(super) fn convergence_failure(&self, index: usize, iters: usize) -> Error {
        Error::ConvergenceFailure {
            alpha: self.point(index).alpha,
            iters,
            history: self.history.clone(),
        }
    }
}
