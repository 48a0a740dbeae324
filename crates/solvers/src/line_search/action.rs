/// Actions an observer can request from a line search.
///
/// There are none. The type is uninhabited, so an observer of a line search
/// can only ever return `None`: observation never changes which points are
/// evaluated or which step is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
