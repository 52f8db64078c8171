use gridpath_core::Point;

// ---------------------------------------------------------------------------
// Internal search nodes
// ---------------------------------------------------------------------------

/// Per-cell search record in the node pool.
///
/// A node belongs to the current query only if its `generation` matches the
/// finder's; anything older is stale and treated as untouched. This lets a
/// new search begin without clearing the pool.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    /// Index of the predecessor cell, `usize::MAX` for the search root.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node pool, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state for a width × height grid.
///
/// The finder owns a node pool sized to the grid plus a scratch buffer for
/// neighbor queries, so repeated searches allocate nothing after warm-up.
/// All state from a finished search is reclaimed by the next call; nothing
/// outlives the query that produced it.
pub struct PathFinder {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a finder for a grid of the given dimensions.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let len = (width * height) as usize;
        Self {
            width,
            height,
            nodes: vec![Node::default(); len],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Change the grid dimensions, reallocating the pool only when it grows.
    ///
    /// If the new size fits within the existing allocation the pool is kept
    /// and the generation counter is bumped so stale nodes are ignored.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        let new_len = (self.width * self.height) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Grid width this finder was sized for.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height this finder was sized for.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.width, self.height).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (width, height) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(PathFinder::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_smaller_preserves_allocation() {
        let mut pf = PathFinder::new(20, 20);
        let original_cap = pf.nodes.len(); // 400

        pf.resize(5, 5);
        assert_eq!(pf.width(), 5);
        assert_eq!(pf.height(), 5);
        assert_eq!(pf.nodes.len(), original_cap); // still 400
        // Generation bumped so stale entries are ignored.
        assert_eq!(pf.generation, 1);
    }

    #[test]
    fn resize_larger_reallocates() {
        let mut pf = PathFinder::new(5, 5);
        let old_cap = pf.nodes.len(); // 25

        pf.resize(20, 20);
        assert!(pf.nodes.len() > old_cap);
        assert_eq!(pf.nodes.len(), 400);
        assert_eq!(pf.generation, 0);
    }

    #[test]
    fn idx_and_point_round_trip() {
        let pf = PathFinder::new(7, 4);
        let p = Point::new(3, 2);
        let i = pf.idx(p).unwrap();
        assert_eq!(pf.point(i), p);
        assert_eq!(pf.idx(Point::new(-1, 0)), None);
        assert_eq!(pf.idx(Point::new(7, 0)), None);
        assert_eq!(pf.idx(Point::new(0, 4)), None);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let pf = PathFinder::new(-2, 9);
        assert_eq!(pf.width(), 0);
        assert_eq!(pf.nodes.len(), 0);
        assert_eq!(pf.idx(Point::ZERO), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathfinder_round_trip() {
        let pf = PathFinder::new(9, 6);
        let json = serde_json::to_string(&pf).unwrap();
        let back: PathFinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 9);
        assert_eq!(back.height(), 6);
        // Caches are freshly initialized (not serialized).
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), 54);
    }
}
