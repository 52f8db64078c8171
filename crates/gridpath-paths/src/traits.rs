use gridpath_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`. The search clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Full A* interface: positive step costs plus a heuristic.
pub trait AstarPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Optimality of the returned paths is only guaranteed when the
    /// estimate never exceeds the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
