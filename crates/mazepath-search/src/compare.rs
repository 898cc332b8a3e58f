//! Side-by-side comparison of several searches on one maze.
//!
//! A [`Comparison`] moves through three states:
//!
//! | State | Meaning |
//! |---|---|
//! | [`Idle`](ComparisonState::Idle) | nothing selected |
//! | [`Selecting`](ComparisonState::Selecting) | one or more algorithms selected |
//! | [`Comparing`](ComparisonState::Comparing) | results populated |
//!
//! [`Comparison::clear`] returns to `Idle` from anywhere.

use mazepath_core::{Maze, Position};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::result::{SearchResult, SearchStats};

/// Fewest algorithms a comparison will run with.
pub const MIN_SELECTION: usize = 2;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Insertion-ordered set of algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<Algorithm>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `algo` if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, algo: Algorithm) -> bool {
        if let Some(i) = self.items.iter().position(|&a| a == algo) {
            self.items.remove(i);
            false
        } else {
            self.items.push(algo);
            true
        }
    }

    pub fn contains(&self, algo: Algorithm) -> bool {
        self.items.contains(&algo)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selected algorithms in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = Algorithm> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<Algorithm> for Selection {
    /// Toggle each item in turn, so duplicates cancel out.
    fn from_iter<I: IntoIterator<Item = Algorithm>>(iter: I) -> Self {
        let mut s = Self::new();
        for a in iter {
            s.toggle(a);
        }
        s
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One algorithm's outcome in a comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    pub algorithm: Algorithm,
    pub stats: SearchStats,
    pub path: Vec<Position>,
    pub visited: Vec<Position>,
}

impl ComparisonResult {
    pub fn new(algorithm: Algorithm, result: SearchResult) -> Self {
        Self {
            algorithm,
            stats: result.stats,
            path: result.path,
            visited: result.visited,
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Sort results by ascending solve time, keeping run order among equal times.
pub fn rank_results(mut results: Vec<ComparisonResult>) -> Vec<ComparisonResult> {
    results.sort_by(|a, b| a.stats.solve_time_ms.total_cmp(&b.stats.solve_time_ms));
    results
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Where a [`Comparison`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonState {
    Idle,
    Selecting,
    Comparing,
}

/// Selection plus the ranked results of the last run.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    selection: Selection,
    results: Vec<ComparisonResult>,
    comparing: bool,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ComparisonState {
        if self.comparing {
            ComparisonState::Comparing
        } else if self.selection.is_empty() {
            ComparisonState::Idle
        } else {
            ComparisonState::Selecting
        }
    }

    #[inline]
    pub fn is_comparing(&self) -> bool {
        self.comparing
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Ranked results of the last comparison, fastest first.
    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    /// Add or remove `algo` from the selection.
    pub fn toggle_algorithm(&mut self, algo: Algorithm) -> bool {
        self.selection.toggle(algo)
    }

    /// How many more algorithms must be selected before a comparison runs.
    pub fn remaining_to_compare(&self) -> usize {
        MIN_SELECTION.saturating_sub(self.selection.len())
    }

    /// Run every selected algorithm on its own copy of `maze` and rank the
    /// results by solve time.
    ///
    /// Returns `Ok(false)` without doing anything when fewer than
    /// [`MIN_SELECTION`] algorithms are selected. Invalid endpoints are
    /// reported before any algorithm runs and leave the state untouched.
    pub fn start_comparison(
        &mut self,
        maze: &Maze,
        start: Position,
        end: Position,
    ) -> Result<bool, SearchError> {
        if self.selection.len() < MIN_SELECTION {
            log::debug!(
                "comparison needs {} more algorithm(s), ignoring",
                self.remaining_to_compare()
            );
            return Ok(false);
        }
        maze.check_endpoints(start, end)?;

        self.comparing = true;
        let mut results = Vec::with_capacity(self.selection.len());
        for algo in self.selection.iter() {
            let snapshot = maze.clone();
            let result = algo.run(&snapshot, start, end);
            results.push(ComparisonResult::new(algo, result));
        }
        self.results = rank_results(results);

        if let Some(best) = self.fastest() {
            log::info!(
                "compared {} algorithms, fastest {} in {:.3}ms",
                self.results.len(),
                best.algorithm.id(),
                best.stats.solve_time_ms
            );
        }
        Ok(true)
    }

    /// Reset selection and results, back to [`ComparisonState::Idle`].
    pub fn clear(&mut self) {
        self.selection.clear();
        self.results.clear();
        self.comparing = false;
    }

    /// The top-ranked result.
    pub fn fastest(&self) -> Option<&ComparisonResult> {
        self.results.first()
    }

    /// The solved result with the shortest path, earliest in ranking order
    /// on ties. `None` if nothing reached the goal.
    pub fn most_efficient(&self) -> Option<&ComparisonResult> {
        self.results
            .iter()
            .filter(|r| r.is_solved())
            .min_by_key(|r| r.stats.path_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    fn fake(algorithm: Algorithm, solve_time_ms: f64, path_length: usize) -> ComparisonResult {
        ComparisonResult {
            algorithm,
            stats: SearchStats {
                solve_time_ms,
                nodes_explored: 0,
                path_length,
            },
            path: vec![Position::ZERO; path_length],
            visited: Vec::new(),
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = Selection::new();
        assert!(s.toggle(Algorithm::Bfs));
        assert!(s.toggle(Algorithm::AStar));
        assert!(s.contains(Algorithm::Bfs));
        assert!(!s.toggle(Algorithm::Bfs));
        assert!(!s.contains(Algorithm::Bfs));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![Algorithm::AStar]);
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let s: Selection = [Algorithm::Ids, Algorithm::Bfs, Algorithm::Dfs]
            .into_iter()
            .collect();
        assert_eq!(
            s.iter().collect::<Vec<_>>(),
            vec![Algorithm::Ids, Algorithm::Bfs, Algorithm::Dfs]
        );
        let s: Selection = [Algorithm::Ids, Algorithm::Bfs, Algorithm::Ids]
            .into_iter()
            .collect();
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn ranking_sorts_by_time() {
        let ranked = rank_results(vec![
            fake(Algorithm::Ids, 3.0, 5),
            fake(Algorithm::Bfs, 1.0, 5),
            fake(Algorithm::Dfs, 2.0, 9),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, vec![Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ids]);
    }

    #[test]
    fn ranking_is_stable_on_equal_times() {
        let ranked = rank_results(vec![
            fake(Algorithm::Ucs, 1.0, 5),
            fake(Algorithm::AStar, 0.5, 5),
            fake(Algorithm::Dfs, 1.0, 5),
            fake(Algorithm::Bfs, 1.0, 5),
        ]);
        let order: Vec<_> = ranked.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            order,
            vec![Algorithm::AStar, Algorithm::Ucs, Algorithm::Dfs, Algorithm::Bfs]
        );
    }

    #[test]
    fn fewer_than_two_is_a_no_op() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        assert_eq!(c.state(), ComparisonState::Idle);
        assert_eq!(c.remaining_to_compare(), 2);
        assert_eq!(c.start_comparison(&f.maze, f.start, f.end), Ok(false));

        c.toggle_algorithm(Algorithm::Bfs);
        assert_eq!(c.state(), ComparisonState::Selecting);
        assert_eq!(c.remaining_to_compare(), 1);
        assert_eq!(c.start_comparison(&f.maze, f.start, f.end), Ok(false));
        assert!(c.results().is_empty());
        assert_eq!(c.state(), ComparisonState::Selecting);
    }

    #[test]
    fn runs_every_selected_algorithm() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        for a in Algorithm::ALL {
            c.toggle_algorithm(a);
        }
        assert_eq!(c.remaining_to_compare(), 0);
        assert_eq!(c.start_comparison(&f.maze, f.start, f.end), Ok(true));
        assert_eq!(c.state(), ComparisonState::Comparing);

        let results = c.results();
        assert_eq!(results.len(), 5);
        for a in Algorithm::ALL {
            assert_eq!(results.iter().filter(|r| r.algorithm == a).count(), 1);
        }
        assert!(
            results
                .windows(2)
                .all(|w| w[0].stats.solve_time_ms <= w[1].stats.solve_time_ms)
        );
        for r in results {
            assert_valid_path(&f.maze, &r.path, f.start, f.end);
            assert_eq!(r.stats.nodes_explored, r.visited.len());
        }
        assert_eq!(c.fastest(), results.first());
    }

    #[test]
    fn results_match_single_runs() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        c.toggle_algorithm(Algorithm::Dfs);
        c.toggle_algorithm(Algorithm::AStar);
        c.start_comparison(&f.maze, f.start, f.end).unwrap();
        for r in c.results() {
            let single = r.algorithm.run(&f.maze, f.start, f.end);
            assert_eq!(r.path, single.path);
            assert_eq!(r.visited, single.visited);
        }
    }

    #[test]
    fn most_efficient_prefers_shortest_solved_path() {
        let mut c = Comparison::new();
        c.results = rank_results(vec![
            fake(Algorithm::Dfs, 0.1, 17),
            fake(Algorithm::Bfs, 0.2, 11),
            fake(Algorithm::AStar, 0.3, 11),
        ]);
        assert_eq!(c.most_efficient().map(|r| r.algorithm), Some(Algorithm::Bfs));
        assert_eq!(c.fastest().map(|r| r.algorithm), Some(Algorithm::Dfs));
    }

    #[test]
    fn most_efficient_tie_goes_to_the_faster_run() {
        let mut c = Comparison::new();
        // Run order Ucs, Ids, AStar; ranking puts AStar first.
        c.results = rank_results(vec![
            fake(Algorithm::Ucs, 0.5, 9),
            fake(Algorithm::Ids, 0.7, 9),
            fake(Algorithm::Dfs, 0.05, 0),
            fake(Algorithm::AStar, 0.2, 9),
        ]);
        let ranked: Vec<_> = c.results.iter().map(|r| r.algorithm).collect();
        assert_eq!(
            ranked,
            vec![Algorithm::Dfs, Algorithm::AStar, Algorithm::Ucs, Algorithm::Ids]
        );
        // The unsolved Dfs run has the smallest length but never wins.
        assert_eq!(c.most_efficient().map(|r| r.algorithm), Some(Algorithm::AStar));
    }

    #[test]
    fn most_efficient_ignores_unreachable() {
        let f = parse(SEALED);
        let mut c = Comparison::new();
        c.toggle_algorithm(Algorithm::Bfs);
        c.toggle_algorithm(Algorithm::Ids);
        assert_eq!(c.start_comparison(&f.maze, f.start, f.end), Ok(true));
        assert!(c.results().iter().all(|r| r.stats.path_length == 0));
        assert!(c.most_efficient().is_none());
    }

    #[test]
    fn bad_endpoints_leave_state_untouched() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        c.toggle_algorithm(Algorithm::Bfs);
        c.toggle_algorithm(Algorithm::Ucs);
        let wall = Position::new(1, 1);
        assert!(c.start_comparison(&f.maze, wall, f.end).is_err());
        assert_eq!(c.state(), ComparisonState::Selecting);
        assert!(c.results().is_empty());
    }

    #[test]
    fn clear_returns_to_idle() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        c.toggle_algorithm(Algorithm::Bfs);
        c.toggle_algorithm(Algorithm::Ucs);
        c.start_comparison(&f.maze, f.start, f.end).unwrap();
        c.clear();
        assert_eq!(c.state(), ComparisonState::Idle);
        assert!(c.selection().is_empty());
        assert!(c.results().is_empty());
        assert!(!c.is_comparing());
    }

    #[test]
    fn rerun_replaces_results() {
        let f = parse(DETOUR);
        let mut c = Comparison::new();
        c.toggle_algorithm(Algorithm::Bfs);
        c.toggle_algorithm(Algorithm::Ucs);
        c.start_comparison(&f.maze, f.start, f.end).unwrap();
        c.toggle_algorithm(Algorithm::AStar);
        c.start_comparison(&f.maze, f.start, f.end).unwrap();
        assert_eq!(c.results().len(), 3);
    }
}
