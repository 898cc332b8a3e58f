use std::collections::{BinaryHeap, HashMap};

use mazepath_core::Position;

/// Parent handle of a root node.
pub const NO_PARENT: usize = usize::MAX;

/// One node of a search tree.
///
/// `parent` is a handle into the owning [`NodeArena`]; the tree is acyclic
/// because a node's parent is always pushed before the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Position,
    /// Steps from the start.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// Priority, `g + h`.
    pub f: i32,
    pub parent: usize,
}

impl SearchNode {
    /// A start node with no parent.
    pub fn root(pos: Position, h: i32) -> Self {
        Self {
            pos,
            g: 0,
            h,
            f: h,
            parent: NO_PARENT,
        }
    }

    /// A node reached from `parent`.
    pub fn child(pos: Position, g: i32, h: i32, parent: usize) -> Self {
        Self {
            pos,
            g,
            h,
            f: g + h,
            parent,
        }
    }
}

/// Append-only storage for the nodes of one search run.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Store a node and return its handle.
    #[inline]
    pub fn push(&mut self, node: SearchNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// The node behind `handle`. Panics on a handle from another arena.
    #[inline]
    pub fn get(&self, handle: usize) -> &SearchNode {
        &self.nodes[handle]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node from `handle` onwards.
    pub fn truncate(&mut self, handle: usize) {
        self.nodes.truncate(handle);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Positions from the root to `handle`, both included.
    pub fn path_to(&self, handle: usize) -> Vec<Position> {
        let mut path = Vec::new();
        let mut ci = handle;
        while ci != NO_PARENT {
            let node = &self.nodes[ci];
            path.push(node.pos);
            ci = node.parent;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Open list for priority-queue searches
// ---------------------------------------------------------------------------

/// Heap entry, ordered by smallest `key`, then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    handle: usize,
    key: i32,
    seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and
        // among equal keys the earliest pushed.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier holding at most one live node per position.
///
/// Pushing a node for a position that is already open replaces the old
/// entry (decrease-key) and keeps its place in the queue order among equal
/// keys; replaced entries stay in the heap and are skipped when popped.
#[derive(Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    /// Live handle and queue sequence per open position.
    live: HashMap<Position, (usize, u64)>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Handle of the open node at `pos`, if any.
    #[inline]
    pub(crate) fn get(&self, pos: Position) -> Option<usize> {
        self.live.get(&pos).map(|&(handle, _)| handle)
    }

    pub(crate) fn push(&mut self, pos: Position, handle: usize, key: i32) {
        let seq = match self.live.get(&pos) {
            Some(&(_, seq)) => seq,
            None => {
                self.seq += 1;
                self.seq - 1
            }
        };
        self.live.insert(pos, (handle, seq));
        self.heap.push(OpenEntry { handle, key, seq });
    }

    /// Remove and return the live node with the smallest key.
    pub(crate) fn pop(&mut self, arena: &NodeArena) -> Option<usize> {
        while let Some(entry) = self.heap.pop() {
            let pos = arena.get(entry.handle).pos;
            // Skip entries superseded by a cheaper node.
            if self.get(pos) == Some(entry.handle) {
                self.live.remove(&pos);
                return Some(entry.handle);
            }
        }
        None
    }
}
