//! Search algorithms for maze grids.
//!
//! This crate implements five classic searches over a [`Maze`] with
//! 4-directional, unit-cost movement:
//!
//! - **A\*** with a Manhattan heuristic ([`astar`])
//! - **Breadth-first search** ([`bfs`])
//! - **Depth-first search** ([`dfs`])
//! - **Uniform-cost search** ([`ucs`])
//! - **Iterative-deepening search** ([`ids`])
//!
//! Every search returns a [`SearchResult`]: the path (empty when the goal is
//! unreachable), the exploration trace in expansion order, and timing
//! statistics. [`Comparison`] runs several algorithms over the same maze and
//! ranks them by solve time.
//!
//! [`Maze`]: mazepath_core::Maze

mod algorithm;
mod astar;
mod bfs;
mod compare;
mod dfs;
mod distance;
mod error;
#[cfg(test)]
mod fixtures;
mod ids;
mod node;
mod result;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::bfs;
pub use compare::{
    Comparison, ComparisonResult, ComparisonState, MIN_SELECTION, Selection, rank_results,
};
pub use dfs::dfs;
pub use distance::manhattan;
pub use error::SearchError;
pub use ids::ids;
pub use node::{NO_PARENT, NodeArena, SearchNode};
pub use result::{SearchResult, SearchStats};
pub use traits::Pather;
pub use ucs::ucs;
