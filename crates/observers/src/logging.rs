//! Observer that forwards solver events to the [`log`] facade.

use std::fmt::Display;

use linesearch_core::Observer;
use log::Level;

/// Logs every event it sees at a fixed level.
///
/// Works with any event that implements [`Display`], which includes the
/// events of both line-search solvers. Records are emitted under the target
/// `linesearch` unless another is set with [`with_target`](Self::with_target).
///
/// # Example
///
/// ```ignore
/// let observer = LogObserver::new(log::Level::Debug);
/// hager_zhang::search(&objective, &ray, &mut scratch, &mut history, step, &config, observer)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer logging at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "linesearch",
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: Display,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: self.target, self.level, "{event}");
        None
    }
}
