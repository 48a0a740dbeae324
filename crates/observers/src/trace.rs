//! In-memory trace of the steps a solver visits.

use linesearch_core::Observer;

use crate::traits::{HasStep, HasValue};

/// An observer that records `(alpha, phi(alpha))` for every event carrying both.
///
/// Events without a step, or without a value, are skipped. Pass
/// `&mut StepTrace` to a solver to keep the trace after the solve completes,
/// or call [`record`](Self::record) from a closure observer to trace custom
/// quantities.
///
/// # Example
///
/// ```ignore
/// let mut trace = StepTrace::new();
/// hager_zhang::search(&objective, &ray, &mut scratch, &mut history, step, &config, &mut trace)?;
/// for [alpha, value] in trace.points() {
///     println!("{alpha:>12.6e} {value:>12.6e}");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepTrace {
    points: Vec<[f64; 2]>,
}

impl StepTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one point.
    pub fn record(&mut self, alpha: f64, value: f64) {
        self.points.push([alpha, value]);
    }

    /// Returns the recorded points in order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the point with the lowest value, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<[f64; 2]> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a[1].total_cmp(&b[1]))
    }

    /// Discards all recorded points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<E, A> Observer<E, A> for StepTrace
where
    E: HasStep + HasValue,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let (alpha, value) = (event.step(), event.value());
        if !alpha.is_nan() && !value.is_nan() {
            self.record(alpha, value);
        }
        None
    }
}

/// Allows `&mut StepTrace` to be passed to solvers that take an observer by
/// value, so the trace can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut StepTrace
where
    E: HasStep + HasValue,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Event {
        step: f64,
        value: f64,
    }

    impl HasStep for Event {
        fn step(&self) -> f64 {
            self.step
        }
    }

    impl HasValue for Event {
        fn value(&self) -> f64 {
            self.value
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(trace: &mut StepTrace, step: f64, value: f64) {
        let _: Option<()> = trace.observe(&Event { step, value });
    }

    #[test]
    fn records_events_with_step_and_value() {
        let mut trace = StepTrace::new();

        feed(&mut trace, 1.0, 2.0);
        feed(&mut trace, 5.0, -1.0);

        assert_eq!(trace.points(), [[1.0, 2.0], [5.0, -1.0]]);
    }

    #[test]
    fn skips_events_missing_either() {
        let mut trace = StepTrace::new();

        feed(&mut trace, f64::NAN, 2.0);
        feed(&mut trace, 1.0, f64::NAN);

        assert!(trace.points().is_empty());
    }

    #[test]
    fn keeps_infinite_values() {
        let mut trace = StepTrace::new();

        feed(&mut trace, 50.0, f64::INFINITY);

        assert_eq!(trace.points(), [[50.0, f64::INFINITY]]);
    }

    #[test]
    fn finds_lowest_point() {
        let mut trace = StepTrace::new();
        assert_eq!(trace.lowest(), None);

        feed(&mut trace, 1.0, 3.0);
        feed(&mut trace, 2.0, -4.0);
        feed(&mut trace, 4.0, 0.5);

        assert_eq!(trace.lowest(), Some([2.0, -4.0]));

        trace.clear();
        assert!(trace.points().is_empty());
    }

    #[test]
    fn works_through_a_mutable_reference() {
        fn observe_by_value<O: Observer<Event, ()>>(mut observer: O, event: Event) -> Option<()> {
            observer.observe(&event)
        }
        let mut trace = StepTrace::new();

        let action = observe_by_value(
            &mut trace,
            Event {
                step: 1.0,
                value: 1.0,
            },
        );

        assert!(action.is_none());
        assert_eq!(trace.points().len(), 1);
    }
}
