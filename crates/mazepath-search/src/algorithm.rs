use std::fmt;
use std::str::FromStr;

use mazepath_core::{Maze, Position};

use crate::error::SearchError;
use crate::result::SearchResult;
use crate::traits::Pather;
use crate::{astar, bfs, dfs, ids, ucs};

/// Identifier of one of the five searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    AStar,
    Bfs,
    Dfs,
    Ucs,
    Ids,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Ids,
    ];

    /// Short identifier: `astar`, `bfs`, `dfs`, `ucs` or `ids`.
    pub const fn id(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::Ids => "ids",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A* Search",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Ids => "IDS",
        }
    }

    /// One-line description for menus.
    pub const fn description(self) -> &'static str {
        match self {
            Self::AStar => "Uses a heuristic to find an optimal path efficiently",
            Self::Bfs => "Breadth-First Search - explores level by level",
            Self::Dfs => "Depth-First Search - explores as far as possible first",
            Self::Ucs => "Uniform Cost Search - finds the lowest cost path",
            Self::Ids => "Iterative Deepening Search - combines DFS and BFS",
        }
    }

    /// Whether the path found is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Run the search without validating the endpoints.
    ///
    /// `start` and `end` must be in-bounds, walkable positions; use
    /// [`solve`](Self::solve) when that is not already known.
    pub fn run<P: Pather>(self, pather: &P, start: Position, end: Position) -> SearchResult {
        let result = match self {
            Self::AStar => astar(pather, start, end),
            Self::Bfs => bfs(pather, start, end),
            Self::Dfs => dfs(pather, start, end),
            Self::Ucs => ucs(pather, start, end),
            Self::Ids => ids(pather, start, end),
        };
        log::debug!(
            "{}: {} -> {}: explored {}, path {}, {:.3}ms",
            self.id(),
            start,
            end,
            result.stats.nodes_explored,
            result.stats.path_length,
            result.stats.solve_time_ms
        );
        result
    }

    /// Validate the endpoints against `maze`, then run the search.
    pub fn solve(
        self,
        maze: &Maze,
        start: Position,
        end: Position,
    ) -> Result<SearchResult, SearchError> {
        maze.check_endpoints(start, end)?;
        Ok(self.run(maze, start, end))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d}, expected one of astar, bfs, dfs, ucs, ids",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
