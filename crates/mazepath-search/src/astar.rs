use std::collections::HashSet;

use mazepath_core::Position;

use crate::distance::manhattan;
use crate::node::{NodeArena, OpenList, SearchNode};
use crate::result::{SearchResult, Trace};
use crate::traits::Pather;

/// A* search with the Manhattan heuristic.
///
/// The frontier is ordered by `f = g + h`, earliest discovery first on ties.
/// When a cheaper route to an open position is found the open node is
/// replaced. Expanded positions are closed and never expanded again.
pub fn astar<P: Pather>(pather: &P, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::start();
    let mut arena = NodeArena::with_capacity(pather.cell_count());
    let mut open = OpenList::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut nbuf = Vec::with_capacity(4);

    let root = arena.push(SearchNode::root(start, manhattan(start, end)));
    open.push(start, root, arena.get(root).f);

    while let Some(ci) = open.pop(&arena) {
        let current = *arena.get(ci);
        trace.visit(current.pos);

        if current.pos == end {
            return trace.solved(arena.path_to(ci));
        }

        closed.insert(current.pos);

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            let g = current.g + 1;
            if let Some(existing) = open.get(np) {
                if g >= arena.get(existing).g {
                    continue;
                }
            }
            let node = SearchNode::child(np, g, manhattan(np, end), ci);
            let handle = arena.push(node);
            open.push(np, handle, node.f);
        }
    }

    trace.unreachable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn open_grid_corner_to_corner() {
        let maze = open_maze(5, 5);
        let r = astar(&maze, Position::new(0, 0), Position::new(4, 4));
        assert_eq!(r.stats.path_length, 9);
        assert_valid_path(&maze, &r.path, Position::new(0, 0), Position::new(4, 4));
        assert_eq!(r.stats.nodes_explored, r.visited.len());
    }

    #[test]
    fn heuristic_keeps_exploration_narrow() {
        let maze = open_maze(5, 5);
        let r = astar(&maze, Position::new(0, 0), Position::new(4, 0));
        // Straight corridor along the top row: only the path is expanded.
        assert_eq!(r.visited, r.path);
        assert_eq!(r.stats.path_length, 5);
    }

    #[test]
    fn finds_shortest_route_around_walls() {
        let f = parse(DETOUR);
        let r = astar(&f.maze, f.start, f.end);
        assert_eq!(r.stats.path_length, DETOUR_SHORTEST);
        assert_valid_path(&f.maze, &r.path, f.start, f.end);
        assert_eq!(r.visited.last(), Some(&f.end));
    }

    #[test]
    fn unreachable_goal_yields_empty_path() {
        let f = parse(SEALED);
        let r = astar(&f.maze, f.start, f.end);
        assert!(r.path.is_empty());
        assert_eq!(r.stats.path_length, 0);
        assert_eq!(r.stats.nodes_explored, SEALED_REACHABLE);
    }

    #[test]
    fn start_equals_end() {
        let maze = open_maze(3, 3);
        let p = Position::new(1, 1);
        let r = astar(&maze, p, p);
        assert_eq!(r.path, vec![p]);
        assert_eq!(r.visited, vec![p]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let f = parse(DETOUR);
        let a = astar(&f.maze, f.start, f.end);
        let b = astar(&f.maze, f.start, f.end);
        assert_eq!(a.path, b.path);
        assert_eq!(a.visited, b.visited);
    }
}
