use std::time::Instant;

use mazepath_core::Position;

/// Measured performance of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchStats {
    /// Wall-clock time of the run in milliseconds, from a monotonic clock.
    pub solve_time_ms: f64,
    /// Always `visited.len()`.
    pub nodes_explored: usize,
    /// Always `path.len()`; 0 when the goal is unreachable.
    pub path_length: usize,
}

/// Output of one search run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start to end inclusive, or empty if no route exists.
    pub path: Vec<Position>,
    /// Every expanded position, in expansion order.
    pub visited: Vec<Position>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Exploration trace and clock of a run in progress.
pub(crate) struct Trace {
    started: Instant,
    visited: Vec<Position>,
}

impl Trace {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
            visited: Vec::new(),
        }
    }

    /// Number of positions explored so far.
    pub(crate) fn len(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub(crate) fn visit(&mut self, p: Position) {
        self.visited.push(p);
    }

    pub(crate) fn solved(self, path: Vec<Position>) -> SearchResult {
        let solve_time_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        SearchResult {
            stats: SearchStats {
                solve_time_ms,
                nodes_explored: self.visited.len(),
                path_length: path.len(),
            },
            path,
            visited: self.visited,
        }
    }

    pub(crate) fn unreachable(self) -> SearchResult {
        self.solved(Vec::new())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_use_camel_case_keys() {
        let stats = SearchStats {
            solve_time_ms: 1.5,
            nodes_explored: 12,
            path_length: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"solveTimeMs":1.5,"nodesExplored":12,"pathLength":7}"#
        );
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
