//! Solvers for line searches, which choose a step length along a descent direction.
//!
//! A line search restricts an [`Objective`] to a [`Ray`] `x + alpha * s` and
//! looks for a step `alpha > 0` that makes enough progress. Every point it
//! evaluates is kept in a [`History`], which also counts non-finite
//! evaluations.
//!
//! # Solvers
//!
//! - [`hager_zhang`]: bracketing, double-secant refinement, and bisection
//!   until the Wolfe conditions hold
//! - [`initial_step`]: the first trial step for an outer iteration, fed to
//!   [`hager_zhang::search`] as an [`InitialStep`]
//!
//! [`Objective`]: linesearch_core::Objective
//! [`Ray`]: linesearch_core::Ray
//! [`History`]: hager_zhang::History

mod action;
mod evaluate;
mod float;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use evaluate::{evaluate_value, evaluate_with_slope};

pub mod hager_zhang;
pub mod initial_step;

pub use initial_step::InitialStep;
