use mazepath_core::{Maze, Position};

/// Grid interface consumed by every search.
pub trait Pather {
    /// Append the walkable neighbours of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);

    /// Total number of cells. Bounds the length of any simple path.
    fn cell_count(&self) -> usize;
}

impl Pather for Maze {
    #[inline]
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        Maze::neighbors(self, p, buf);
    }

    #[inline]
    fn cell_count(&self) -> usize {
        self.len()
    }
}
