//! Line-search solvers built on [`linesearch_core`].
//!
//! - [`line_search::hager_zhang`]: the Hager–Zhang line search, returning a
//!   step that satisfies the standard or approximate Wolfe conditions
//! - [`line_search::initial_step`]: the companion heuristic that proposes
//!   the first trial step for each outer iteration

pub mod line_search;
