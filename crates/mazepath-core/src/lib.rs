//! **mazepath-core**: the maze grid model shared by the *mazepath* crates.
//!
//! This crate provides the read-only view of a maze that the search engine
//! consumes: integer [`Position`]s on the `(x, z)` plane, [`MazeCell`]s
//! carrying a wall flag, and the rectangular [`Maze`] with its fixed
//! 4-directional adjacency rule. [`MazeGen`] builds random mazes for demos
//! and tests.

pub mod cell;
pub mod error;
pub mod geom;
pub mod mapgen;
pub mod maze;

pub use cell::MazeCell;
pub use error::MazeError;
pub use geom::Position;
pub use mapgen::MazeGen;
pub use maze::{Maze, ParsedMaze};
