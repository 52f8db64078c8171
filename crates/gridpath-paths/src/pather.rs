use gridpath_core::{Point, TileMap};

use crate::distance::{chebyshev, manhattan};
use crate::traits::{AstarPather, Pather};

/// Heuristic used by [`TilePather`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// `|dx| + |dy|`. Overestimates diagonal travel under unit step cost,
    /// which can occasionally trade path optimality for fewer expansions.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`. Admissible for unit-cost 8-way movement.
    Chebyshev,
}

/// Standard pather for a [`TileMap`]: 8-directional movement, unit step
/// cost (diagonals included), walls impassable.
///
/// Walls are filtered out at neighbor enumeration, so a goal on a wall is
/// simply never reached, while a wall under the start cell does not stop
/// the search from leaving it.
pub struct TilePather<'a> {
    map: &'a TileMap,
    heuristic: Heuristic,
}

impl<'a> TilePather<'a> {
    /// Pather with the default Manhattan heuristic.
    pub fn new(map: &'a TileMap) -> Self {
        Self::with_heuristic(map, Heuristic::Manhattan)
    }

    /// Pather with an explicit heuristic choice.
    pub fn with_heuristic(map: &'a TileMap, heuristic: Heuristic) -> Self {
        Self { map, heuristic }
    }
}

impl Pather for TilePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_8() {
            // is_wall also rejects out-of-bounds cells.
            if !self.map.is_wall(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for TilePather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.heuristic {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Tile;

    #[test]
    fn neighbors_exclude_walls_and_bounds() {
        let mut map = TileMap::new(3, 3);
        map.set(Point::new(1, 0), Tile::Wall);

        let pather = TilePather::new(&map);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);

        // Corner cell: three in-bounds neighbors, one of them walled.
        buf.sort();
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let map = TileMap::new(3, 3);
        let pather = TilePather::new(&map);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn unit_cost_and_heuristics() {
        let map = TileMap::new(5, 5);
        let a = Point::new(0, 0);
        let b = Point::new(3, 2);

        let p = TilePather::new(&map);
        assert_eq!(p.cost(a, Point::new(1, 1)), 1);
        assert_eq!(p.estimate(a, b), 5);

        let c = TilePather::with_heuristic(&map, Heuristic::Chebyshev);
        assert_eq!(c.estimate(a, b), 3);
    }
}
