use std::ops::Index;

use linesearch_core::{Objective, Ray};

use super::Point;

/// Append-only record of the points evaluated along one ray.
///
/// Entry `0` is always the ray origin at `alpha = 0`. Brackets refer to
/// entries by index and entries are never removed, so an index stays valid
/// for as long as the history lives.
///
/// Non-finite evaluations are not stored; they only increment
/// [`failures`](Self::failures).
///
/// A history describes a single search. Start every search from a fresh
/// history built with [`new`](Self::new) or [`at_origin`](Self::at_origin).
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    points: Vec<Point>,
    failures: usize,
}

impl History {
    /// Creates a history holding only the ray origin.
    #[must_use]
    pub fn new(value: f64, slope: f64) -> Self {
        Self {
            points: vec![Point::new(0.0, value, slope)],
            failures: 0,
        }
    }

    /// Creates a history by evaluating the objective at the ray origin.
    ///
    /// # Errors
    ///
    /// Returns the objective's error if it cannot be evaluated.
    pub fn at_origin<const N: usize, O>(objective: &O, ray: &Ray<N>) -> Result<Self, O::Error>
    where
        O: Objective<N>,
    {
        let (value, gradient) = objective.value_and_gradient(ray.origin())?;
        Ok(Self::new(value, ray.slope(&gradient)))
    }

    /// Returns the ray origin entry.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.points[0]
    }

    /// Returns the number of stored points, origin included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: the origin is stored from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns all stored points in evaluation order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the stored points in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Returns the number of non-finite evaluations seen so far.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Appends a point and returns its index.
    pub(crate) fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Counts a non-finite evaluation and returns the new total.
    pub(crate) fn record_failure(&mut self) -> usize {
        self.failures += 1;
        self.failures
    }
}

impl Index<usize> for History {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
