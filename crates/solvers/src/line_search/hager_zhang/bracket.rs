use super::{Error, History, Point};

/// Two history indices whose steps enclose a Wolfe point.
///
/// The lower end has `phi' < 0` and `phi <= value_limit`. The upper end lies
/// further along the ray and has either `phi' >= 0`, or `phi' < 0` with
/// `phi > value_limit` (the function rose over a bump in between).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Bracket {
    pub(super) lower: usize,
    pub(super) upper: usize,
}

impl Bracket {
    pub(super) fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    pub(super) fn ends(self, history: &History) -> (Point, Point) {
        (history[self.lower], history[self.upper])
    }

    /// Returns the end points after checking the bracket conditions.
    pub(super) fn validate(
        self,
        history: &History,
        value_limit: f64,
    ) -> Result<(Point, Point), Error> {
        let (lower, upper) = self.ends(history);

        let valid = upper.alpha > lower.alpha
            && lower.slope < 0.0
            && lower.value <= value_limit
            && (upper.slope >= 0.0 || upper.value > value_limit);

        if valid {
            Ok((lower, upper))
        } else {
            Err(Error::InvalidBracket {
                lower: lower.alpha,
                upper: upper.alpha,
            })
        }
    }
}
