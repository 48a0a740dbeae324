//! Core traits and types shared by the line-search solvers.
//!
//! This crate defines the abstractions that solvers and observers build on:
//!
//! - [`Objective`]: a differentiable scalar function of `N` variables
//! - [`Ray`]: the half-line `x + alpha * s` a line search walks along
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;
mod ray;

pub use objective::Objective;
pub use observer::Observer;
pub use ray::Ray;
