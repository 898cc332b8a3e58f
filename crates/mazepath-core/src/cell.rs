/// One grid cell. Only the wall flag matters to the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MazeCell {
    /// Impassable if `true`.
    pub is_wall: bool,
}

impl MazeCell {
    /// An open (walkable) cell.
    pub const OPEN: Self = Self { is_wall: false };

    /// A wall cell.
    pub const WALL: Self = Self { is_wall: true };

    /// Create a cell with the given wall flag.
    pub const fn new(is_wall: bool) -> Self {
        Self { is_wall }
    }

    /// Whether a walker may stand on this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !self.is_wall
    }
}
