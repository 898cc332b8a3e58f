use mazepath_core::Position;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-directional unit-cost movement.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    a.manhattan(b)
}
