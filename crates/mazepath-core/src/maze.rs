//! The rectangular maze grid and its adjacency rule.
//!
//! A [`Maze`] owns its cells in a flat row-major buffer (by `z`, then `x`).
//! Cloning a maze therefore yields a fully independent copy: no two mazes
//! ever share cell storage.

use crate::cell::MazeCell;
use crate::error::MazeError;
use crate::geom::Position;

/// A non-empty rectangular grid of [`MazeCell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<MazeCell>>", into = "Vec<Vec<MazeCell>>")
)]
pub struct Maze {
    cells: Vec<MazeCell>,
    width: usize,
    height: usize,
}

/// Result of [`Maze::parse`]: the grid plus the optional `S` / `E` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMaze {
    pub maze: Maze,
    pub start: Option<Position>,
    pub end: Option<Position>,
}

impl Maze {
    /// Create an open maze of the given size. Zero dimensions are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::filled(width, height, MazeCell::OPEN)
    }

    /// Create a maze with every cell set to `cell`.
    pub fn filled(width: usize, height: usize, cell: MazeCell) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        Ok(Self {
            cells: vec![cell; width * height],
            width,
            height,
        })
    }

    /// Create a maze from rows of cells (`rows[z][x]`).
    ///
    /// Every row must have the width of the first one.
    pub fn from_rows(rows: Vec<Vec<MazeCell>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(MazeError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse an ASCII maze.
    ///
    /// `#` is a wall; `.` and space are open; `S` and `E` are open cells
    /// marking the start and end, each at most once. Blank leading and
    /// trailing lines are ignored, lines must all have the same width.
    pub fn parse(s: &str) -> Result<ParsedMaze, MazeError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;

        for (z, line) in s.trim_matches('\n').lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                let pos = Position::new(x as i32, z as i32);
                let cell = match ch {
                    '#' => MazeCell::WALL,
                    '.' | ' ' => MazeCell::OPEN,
                    'S' | 'E' => {
                        let marker = if ch == 'S' { &mut start } else { &mut end };
                        if let Some(first) = *marker {
                            return Err(MazeError::DuplicateMarker {
                                ch,
                                first,
                                second: pos,
                            });
                        }
                        *marker = Some(pos);
                        MazeCell::OPEN
                    }
                    _ => return Err(MazeError::InvalidRune { ch, pos }),
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(ParsedMaze {
            maze: Self::from_rows(rows)?,
            start,
            end,
        })
    }

    /// Width (number of columns, `x` extent).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height (number of rows, `z` extent).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a maze has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside `0 ≤ x < width`, `0 ≤ z < height`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.z >= 0 && (p.x as usize) < self.width && (p.z as usize) < self.height
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.z as usize * self.width + p.x as usize)
    }

    /// Position of a flat index.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        Position::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<MazeCell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is an in-bounds wall.
    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.at(p).is_some_and(|c| c.is_wall)
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        self.at(p).is_some_and(MazeCell::is_walkable)
    }

    /// Set the wall flag at `p`. Does nothing if out of bounds.
    pub fn set_wall(&mut self, p: Position, is_wall: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i].is_wall = is_wall;
        }
    }

    /// Number of wall cells.
    pub fn count_walls(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Iterate over the rows, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[MazeCell]> {
        self.cells.chunks(self.width)
    }

    /// Iterate over `(Position, MazeCell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, MazeCell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.position(i), c))
    }

    /// Append the walkable cardinal neighbours of `p` into `buf`, in the
    /// order north, south, west, east. The caller clears `buf` first.
    pub fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.is_walkable(n)),
        );
    }

    /// Check that `p` is a valid endpoint: in bounds and not a wall.
    pub fn check_endpoint(&self, p: Position) -> Result<(), MazeError> {
        match self.at(p) {
            None => Err(MazeError::OutOfBounds(p)),
            Some(c) if c.is_wall => Err(MazeError::OnWall(p)),
            Some(_) => Ok(()),
        }
    }

    /// Check both endpoints of a search.
    pub fn check_endpoints(&self, start: Position, end: Position) -> Result<(), MazeError> {
        self.check_endpoint(start)?;
        self.check_endpoint(end)
    }
}

impl TryFrom<Vec<Vec<MazeCell>>> for Maze {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<MazeCell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Maze> for Vec<Vec<MazeCell>> {
    fn from(m: Maze) -> Self {
        m.rows().map(<[MazeCell]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
#####
#S..#
#.#.#
#..E#
#####
";

    #[test]
    fn parse_markers_and_size() {
        let parsed = Maze::parse(ROOM).unwrap();
        assert_eq!(parsed.maze.width(), 5);
        assert_eq!(parsed.maze.height(), 5);
        assert_eq!(parsed.start, Some(Position::new(1, 1)));
        assert_eq!(parsed.end, Some(Position::new(3, 3)));
        assert_eq!(parsed.maze.count_walls(), 17);
        assert!(parsed.maze.is_wall(Position::new(2, 2)));
    }

    #[test]
    fn parse_rejects_unknown_rune() {
        let err = Maze::parse("#.\n#x").unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidRune {
                ch: 'x',
                pos: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_second_marker() {
        let err = Maze::parse("S.E\n..S").unwrap_err();
        assert_eq!(
            err,
            MazeError::DuplicateMarker {
                ch: 'S',
                first: Position::new(0, 0),
                second: Position::new(2, 1)
            }
        );
        assert!(matches!(
            Maze::parse("E..\n.#.\nS.E"),
            Err(MazeError::DuplicateMarker { ch: 'E', .. })
        ));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Maze::parse("###\n##\n###").unwrap_err();
        assert_eq!(
            err,
            MazeError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_maze_is_rejected() {
        assert_eq!(Maze::new(0, 3).unwrap_err(), MazeError::Empty);
        assert_eq!(Maze::from_rows(vec![]).unwrap_err(), MazeError::Empty);
        assert_eq!(Maze::from_rows(vec![vec![]]).unwrap_err(), MazeError::Empty);
    }

    #[test]
    fn neighbors_filter_bounds_and_walls() {
        let m = Maze::parse(ROOM).unwrap().maze;
        let mut buf = Vec::new();
        m.neighbors(Position::new(1, 1), &mut buf);
        // north and west are walls
        assert_eq!(buf, vec![Position::new(1, 2), Position::new(2, 1)]);

        buf.clear();
        let open = Maze::new(3, 3).unwrap();
        open.neighbors(Position::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Position::new(0, 1), Position::new(1, 0)]);

        buf.clear();
        open.neighbors(Position::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn index_round_trip() {
        let m = Maze::new(4, 3).unwrap();
        assert_eq!(m.index(Position::new(2, 1)), Some(6));
        assert_eq!(m.position(6), Position::new(2, 1));
        assert_eq!(m.index(Position::new(4, 0)), None);
        assert_eq!(m.index(Position::new(0, -1)), None);
    }

    #[test]
    fn endpoint_checks() {
        let m = Maze::parse(ROOM).unwrap().maze;
        assert!(m.check_endpoints(Position::new(1, 1), Position::new(3, 3)).is_ok());
        assert_eq!(
            m.check_endpoint(Position::new(0, 0)),
            Err(MazeError::OnWall(Position::new(0, 0)))
        );
        assert_eq!(
            m.check_endpoints(Position::new(1, 1), Position::new(9, 9)),
            Err(MazeError::OutOfBounds(Position::new(9, 9)))
        );
    }

    #[test]
    fn clone_is_independent() {
        let a = Maze::new(3, 3).unwrap();
        let mut b = a.clone();
        b.set_wall(Position::new(1, 1), true);
        assert!(!a.is_wall(Position::new(1, 1)));
        assert!(b.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn rows_and_iter_are_row_major() {
        let m = Maze::parse("#.\n.#").unwrap().maze;
        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[MazeCell::WALL, MazeCell::OPEN]);
        let cells: Vec<_> = m.iter().collect();
        assert_eq!(cells[1], (Position::new(1, 0), MazeCell::OPEN));
        assert_eq!(cells[3], (Position::new(1, 1), MazeCell::WALL));
    }
}
