//! Capability traits for observers shared across line-search solvers.
//!
//! These traits abstract over the solver-specific event types, so that one
//! observer can watch both the initial step estimator and the line search.
//!
//! - [`HasStep`]: events that refer to a step length `alpha`
//! - [`HasValue`]: events that carry a line-function value `phi(alpha)`
//!
//! # Example
//!
//! ```rust
//! use linesearch_core::Observer;
//! use linesearch_observers::traits::HasStep;
//!
//! /// Remembers the largest step any event mentioned.
//! struct Farthest(f64);
//!
//! impl<E: HasStep, A> Observer<E, A> for Farthest {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let step = event.step();
//!         if step > self.0 {
//!             self.0 = step;
//!         }
//!         None
//!     }
//! }
//! ```

use linesearch_solvers::line_search::{hager_zhang, initial_step};

/// An event that refers to a step length.
pub trait HasStep {
    /// Returns the step for this event.
    ///
    /// Returns `f64::NAN` when the event refers to no single step, such as a
    /// bracket update.
    fn step(&self) -> f64;
}

/// An event that carries a line-function value.
pub trait HasValue {
    /// Returns `phi(alpha)` for this event.
    ///
    /// Returns `f64::NAN` when the event carries no finite evaluation.
    fn value(&self) -> f64;
}

// --- hager_zhang::Event ---

impl HasStep for hager_zhang::Event {
    fn step(&self) -> f64 {
        self.alpha().unwrap_or(f64::NAN)
    }
}

impl HasValue for hager_zhang::Event {
    fn value(&self) -> f64 {
        match self {
            hager_zhang::Event::Evaluated { point, .. }
            | hager_zhang::Event::Accepted { point, .. } => point.value,
            _ => f64::NAN,
        }
    }
}

// --- initial_step::Event ---

impl HasStep for initial_step::Event {
    fn step(&self) -> f64 {
        self.alpha()
    }
}

impl HasValue for initial_step::Event {
    fn value(&self) -> f64 {
        match self {
            initial_step::Event::Trial { value, .. } => *value,
            _ => f64::NAN,
        }
    }
}
