use std::collections::HashSet;

use mazepath_core::Position;

use crate::node::{NodeArena, OpenList, SearchNode};
use crate::result::{SearchResult, Trace};
use crate::traits::Pather;

/// Uniform-cost search.
///
/// The frontier is ordered by path cost `g` alone. With unit steps this
/// expands cells in the same layers as BFS, but the ordering comes from cost
/// comparison, and an open node is replaced when a cheaper route reaches it.
/// The closed-set check happens at pop time.
pub fn ucs<P: Pather>(pather: &P, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::start();
    let mut arena = NodeArena::with_capacity(pather.cell_count());
    let mut open = OpenList::new();
    let mut closed: HashSet<Position> = HashSet::new();
    let mut nbuf = Vec::with_capacity(4);

    let root = arena.push(SearchNode::root(start, 0));
    open.push(start, root, 0);

    while let Some(ci) = open.pop(&arena) {
        let current = *arena.get(ci);
        if !closed.insert(current.pos) {
            continue;
        }
        trace.visit(current.pos);

        if current.pos == end {
            return trace.solved(arena.path_to(ci));
        }

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
            let handle = arena.push(SearchNode::child(np, g, 0, ci));
            open.push(np, handle, g);
        }
    }

    trace.unreachable()
}
