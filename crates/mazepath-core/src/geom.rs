//! Grid coordinates: [`Position`].
//!
//! The maze lies on the `(x, z)` plane. `x` grows east, `z` grows south, so
//! row-major order is "by `z`, then by `x`".

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::MazeError;

/// An integer grid coordinate. Equality is structural.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub z: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Unit steps in adjacency order: north, south, west, east.
    pub const DIRECTIONS: [Position; 4] = [
        Position::new(0, -1),
        Position::new(0, 1),
        Position::new(-1, 0),
        Position::new(1, 0),
    ];

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a position shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// The four cardinal candidates (north, south, west, east), unfiltered.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// Canonical `"x,z"` key, identical to the `Display` output.
    pub fn key(self) -> String {
        self.to_string()
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::InvalidPosition(s.to_string());
        let (x, z) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let z = z.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, z))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}
