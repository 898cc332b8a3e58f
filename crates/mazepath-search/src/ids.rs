use std::collections::HashSet;

use mazepath_core::Position;

use crate::node::{NodeArena, SearchNode};
use crate::result::{SearchResult, Trace};
use crate::traits::Pather;

/// Iterative-deepening search.
///
/// Runs a depth-limited search for each limit `0, 1, 2, …` up to the number
/// of cells in the grid. Each branch carries its own copy of the positions on
/// its way from the start, so sibling branches never block each other. The
/// exploration trace accumulates over every iteration, which makes the
/// explored count much larger than for the other searches.
///
/// Because limits grow one step at a time, the first path found is a
/// shortest one.
pub fn ids<P: Pather>(pather: &P, start: Position, end: Position) -> SearchResult {
    let mut search = DepthLimited {
        pather,
        end,
        arena: NodeArena::new(),
        trace: Trace::start(),
    };
    let max_depth = pather.cell_count();

    for limit in 0..=max_depth {
        search.arena.clear();
        let root = search.arena.push(SearchNode::root(start, 0));
        let found = search.dls(root, limit, HashSet::new());
        log::trace!(
            "ids: depth {limit} done, {} positions explored so far",
            search.trace.len()
        );
        if let Some(goal) = found {
            let path = search.arena.path_to(goal);
            return search.trace.solved(path);
        }
    }

    search.trace.unreachable()
}

struct DepthLimited<'a, P> {
    pather: &'a P,
    end: Position,
    /// Nodes of the branch currently being explored.
    arena: NodeArena,
    trace: Trace,
}

impl<P: Pather> DepthLimited<'_, P> {
    /// Explore from `handle` at most `depth` more steps. `on_branch` holds
    /// the ancestors of `handle` and is owned by this call.
    fn dls(
        &mut self,
        handle: usize,
        depth: usize,
        mut on_branch: HashSet<Position>,
    ) -> Option<usize> {
        let node = *self.arena.get(handle);
        self.trace.visit(node.pos);

        if node.pos == self.end {
            return Some(handle);
        }
        if depth == 0 {
            return None;
        }

        on_branch.insert(node.pos);

        let mut nbuf = Vec::with_capacity(4);
        self.pather.neighbors(node.pos, &mut nbuf);

        for np in nbuf {
            if on_branch.contains(&np) {
                continue;
            }
            let child = self.arena.push(SearchNode::child(np, node.g + 1, 0, handle));
            if let Some(goal) = self.dls(child, depth - 1, on_branch.clone()) {
                return Some(goal);
            }
            self.arena.truncate(child);
        }

        None
    }
}
