use std::fmt;

use gridwalk_core::Point;

/// Errors reported before a search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start point is not a cell of the grid.
    StartOutOfRange(Point),
    /// The end point is not a cell of the grid.
    EndOutOfRange(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfRange(p) => write!(f, "start {p} is outside the grid"),
            Self::EndOutOfRange(p) => write!(f, "end {p} is outside the grid"),
        }
    }
}

impl std::error::Error for SearchError {}
