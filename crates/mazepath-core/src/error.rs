use std::fmt;

use crate::geom::Position;

/// Errors raised when a maze or an endpoint violates the grid invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The maze has no rows or no columns.
    Empty,
    /// A row does not have the width of the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet was found while parsing.
    InvalidRune { ch: char, pos: Position },
    /// A start or end marker appears more than once.
    DuplicateMarker {
        ch: char,
        first: Position,
        second: Position,
    },
    /// A string is not a valid `"x,z"` position key.
    InvalidPosition(String),
    /// A position lies outside the grid.
    OutOfBounds(Position),
    /// A position that must be walkable is a wall.
    OnWall(Position),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "maze contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "maze has more than one \u{201c}{ch}\u{201d} marker, at {first} and {second}"
            ),
            Self::InvalidPosition(s) => {
                write!(f, "invalid position \u{201c}{s}\u{201d}, expected \"x,z\"")
            }
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the maze"),
            Self::OnWall(p) => write!(f, "position {p} is a wall"),
        }
    }
}

impl std::error::Error for MazeError {}
