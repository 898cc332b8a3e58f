//! Random maze generation.
//!
//! - **Backtracker**: a randomized depth-first carve producing a perfect maze
//!   (exactly one route between any two open cells).
//! - **Braid**: knock extra holes into an existing maze to create loops.
//! - **Scatter**: independent random walls, for fuzzing.

use rand::{Rng, RngExt};

use crate::cell::MazeCell;
use crate::error::MazeError;
use crate::geom::Position;
use crate::maze::Maze;

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze with a randomized depth-first backtracker.
    ///
    /// Dimensions are rounded up to odd values of at least 3. The outer
    /// border is solid; rooms sit on odd coordinates, so `(1, 1)` and
    /// `(width - 2, height - 2)` are always open and connected.
    pub fn backtracker(&mut self, width: usize, height: usize) -> Result<Maze, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        let width = (width | 1).max(3);
        let height = (height | 1).max(3);
        let mut maze = Maze::filled(width, height, MazeCell::WALL)?;

        let origin = Position::new(1, 1);
        maze.set_wall(origin, false);
        let mut stack = vec![origin];
        let mut options = Vec::with_capacity(4);

        while let Some(&current) = stack.last() {
            options.clear();
            options.extend(
                Position::DIRECTIONS
                    .iter()
                    .map(|&d| current + d + d)
                    .filter(|&room| Self::is_room(&maze, room) && maze.is_wall(room)),
            );
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let room = options[self.rng.random_range(0..options.len())];
            let between = Position::new((current.x + room.x) / 2, (current.z + room.z) / 2);
            maze.set_wall(between, false);
            maze.set_wall(room, false);
            stack.push(room);
        }

        Ok(maze)
    }

    /// Open up to `count` interior walls that join two open cells in a
    /// straight line, adding loops. Returns how many walls were removed.
    pub fn braid(&mut self, maze: &mut Maze, count: usize) -> usize {
        let mut candidates: Vec<Position> = maze
            .iter()
            .filter(|&(p, c)| c.is_wall && Self::joins_open_cells(maze, p))
            .map(|(p, _)| p)
            .collect();

        let mut removed = 0;
        while removed < count && !candidates.is_empty() {
            let i = self.rng.random_range(0..candidates.len());
            let p = candidates.swap_remove(i);
            maze.set_wall(p, false);
            removed += 1;
        }
        removed
    }

    /// A maze where each cell is a wall with probability `wall_pct`.
    pub fn scatter(
        &mut self,
        width: usize,
        height: usize,
        wall_pct: f64,
    ) -> Result<Maze, MazeError> {
        let mut maze = Maze::new(width, height)?;
        for z in 0..height {
            for x in 0..width {
                let r: f64 = self.rng.random();
                if r < wall_pct {
                    maze.set_wall(Position::new(x as i32, z as i32), true);
                }
            }
        }
        Ok(maze)
    }

    /// Whether `p` is an interior cell on odd coordinates.
    fn is_room(maze: &Maze, p: Position) -> bool {
        p.x > 0
            && p.z > 0
            && (p.x as usize) < maze.width() - 1
            && (p.z as usize) < maze.height() - 1
            && p.x % 2 == 1
            && p.z % 2 == 1
    }

    fn joins_open_cells(maze: &Maze, p: Position) -> bool {
        let [n, s, w, e] = p.neighbors_4();
        let vertical = maze.is_walkable(n) && maze.is_walkable(s);
        let horizontal = maze.is_walkable(w) && maze.is_walkable(e);
        vertical || horizontal
    }
}
