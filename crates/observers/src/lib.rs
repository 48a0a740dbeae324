//! Reusable observers for the line-search solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`linesearch_solvers`].
//!
//! - [`LogObserver`]: forwards every event to the [`log`] facade
//! - [`StepTrace`]: records each evaluated step and its value in memory
//! - [`traits`]: capability traits ([`HasStep`], [`HasValue`]) for writing
//!   observers that work with either solver
//!
//! [`Observer`]: linesearch_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasValue`]: traits::HasValue

pub mod traits;

mod logging;
mod trace;

pub use logging::LogObserver;
pub use trace::StepTrace;
