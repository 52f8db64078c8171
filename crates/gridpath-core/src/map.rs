//! An owned fixed-size 2D map of [`Tile`]s.

use crate::{Point, Tile};

/// A width × height tile map in row-major order.
///
/// The map is a plain value: it is passed by reference into searches and is
/// immutable for the duration of each one. Out-of-range accesses are
/// filtered (`at` returns `None`, `set` is a no-op) rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a new map filled with [`Tile::Empty`].
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; (width * height) as usize],
        }
    }

    /// Build a map from rows of integer-encoded tiles (see
    /// [`Tile::from_value`]): 0 empty, 1 wall, 2 start, 3 goal.
    pub fn from_rows<const W: usize>(rows: &[[i32; W]]) -> Self {
        let mut map = Self::new(W as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                map.set(Point::new(x as i32, y as i32), Tile::from_value(v));
            }
        }
        map
    }

    /// Width of the map.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the map.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies within the map bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[self.index(p)])
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if !self.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.tiles[idx] = tile;
    }

    /// Fill the entire map with the given tile.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Fill the map using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Tile) {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let idx = self.index(p);
                self.tiles[idx] = f(p);
            }
        }
    }

    /// Whether the cell at `p` is impassable. Out-of-bounds cells count as
    /// blocked.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        match self.at(p) {
            Some(t) => t.blocks(),
            None => true,
        }
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        let w = self.width;
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            let i = i as i32;
            (Point::new(i % w, i / w), t)
        })
    }
}
