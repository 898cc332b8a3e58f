use std::collections::HashSet;

use mazepath_core::Position;

use crate::node::{NodeArena, SearchNode};
use crate::result::{SearchResult, Trace};
use crate::traits::Pather;

/// Depth-first search.
///
/// Positions are marked visited when popped, not when pushed, so a position
/// may sit on the stack several times; later copies are skipped. The path
/// found is valid but not necessarily the shortest.
pub fn dfs<P: Pather>(pather: &P, start: Position, end: Position) -> SearchResult {
    let mut trace = Trace::start();
    let mut arena = NodeArena::with_capacity(pather.cell_count());
    let mut stack: Vec<usize> = Vec::new();
    let mut visited: HashSet<Position> = HashSet::new();
    let mut nbuf = Vec::with_capacity(4);

    stack.push(arena.push(SearchNode::root(start, 0)));

    while let Some(ci) = stack.pop() {
        let current = *arena.get(ci);
        if !visited.insert(current.pos) {
            continue;
        }
        trace.visit(current.pos);

        if current.pos == end {
            return trace.solved(arena.path_to(ci));
        }

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            if !visited.contains(&np) {
                stack.push(arena.push(SearchNode::child(np, current.g + 1, 0, ci)));
            }
        }
    }

    trace.unreachable()
}
