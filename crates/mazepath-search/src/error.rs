use std::fmt;

use mazepath_core::MazeError;

/// Errors raised before a search starts.
///
/// An unreachable goal is not an error; it yields a [`SearchResult`] with an
/// empty path.
///
/// [`SearchResult`]: crate::SearchResult
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The maze or an endpoint violates the grid invariants.
    Maze(MazeError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "invalid search input: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
        }
    }
}

impl From<MazeError> for SearchError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}
