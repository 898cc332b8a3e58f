//! Shared mazes and assertions for the unit tests.

use std::collections::HashSet;

use mazepath_core::{Maze, Position};

/// Two routes to the goal; the short one runs down the west side.
pub(crate) const DETOUR: &str = "
S..#...
.#.#.#.
.#...#.
.####..
......E
";
pub(crate) const DETOUR_SHORTEST: usize = 11;
pub(crate) const DETOUR_DFS_LENGTH: usize = 17;

/// The goal sits behind a full-height wall.
pub(crate) const SEALED: &str = "
S..#...
.#.#.#.
...#.#E
";
/// Open cells on the start side of the wall.
pub(crate) const SEALED_REACHABLE: usize = 8;

/// A parsed fixture with both markers present.
pub(crate) struct Fixture {
    pub(crate) maze: Maze,
    pub(crate) start: Position,
    pub(crate) end: Position,
}

pub(crate) fn parse(s: &str) -> Fixture {
    let parsed = Maze::parse(s).unwrap();
    Fixture {
        maze: parsed.maze,
        start: parsed.start.unwrap(),
        end: parsed.end.unwrap(),
    }
}

pub(crate) fn open_maze(width: usize, height: usize) -> Maze {
    Maze::new(width, height).unwrap()
}

/// Panic unless `path` walks from `start` to `end` over adjacent, walkable,
/// distinct cells.
pub(crate) fn assert_valid_path(maze: &Maze, path: &[Position], start: Position, end: Position) {
    assert_eq!(path.first(), Some(&start), "path must begin at the start");
    assert_eq!(path.last(), Some(&end), "path must finish at the end");
    for p in path {
        assert!(maze.is_walkable(*p), "{p} is not walkable");
    }
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} and {} are not adjacent", w[0], w[1]);
    }
    let unique: HashSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path revisits a cell");
}
