use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The classic 4-way grid heuristic. Under unit-cost 8-way movement it
/// overestimates diagonal travel and is therefore not admissible.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// Equals the minimum number of unit-cost 8-way steps between the points,
/// so it is admissible (and exact on an obstacle-free grid).
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
