use std::collections::{HashSet, VecDeque};

use mazepath_core::Position;

use crate::node::{NodeArena, SearchNode};
use crate::result::{SearchResult, Trace};
use crate::traits::Pather;

/// Breadth-first search.
///
/// Positions are marked seen when enqueued, so each is queued at most once.
/// The path found has the fewest steps.
pub fn bfs<P: Pather>(pather: &P, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::start();
    let mut arena = NodeArena::with_capacity(pather.cell_count());
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut seen: HashSet<Position> = HashSet::new();
    let mut nbuf = Vec::with_capacity(4);

    queue.push_back(arena.push(SearchNode::root(start, 0)));
    seen.insert(start);

    while let Some(ci) = queue.pop_front() {
        let current = *arena.get(ci);
        trace.visit(current.pos);

        if current.pos == end {
            return trace.solved(arena.path_to(ci));
        }

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            if seen.insert(np) {
                queue.push_back(arena.push(SearchNode::child(np, current.g + 1, 0, ci)));
            }
        }
    }

    trace.unreachable()
}
