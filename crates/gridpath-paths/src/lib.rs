//! A* shortest-path search over fixed-size tile maps.
//!
//! The one-shot entry point is [`find_path`]: given a
//! [`TileMap`](gridpath_core::TileMap) and two coordinates, it returns the
//! path from start to goal inclusive, or an empty vector when the goal is
//! unreachable. There is no error type; "no path" is not a failure.
//!
//! Callers that search repeatedly (for example once per frame) should hold
//! on to a [`PathFinder`]: it owns an index-based node pool that is lazily
//! invalidated between queries, so repeated searches allocate nothing after
//! warm-up. The search itself is generic over [`AstarPather`]; [`TilePather`]
//! is the standard implementation for tile maps (8-directional movement,
//! unit step cost, walls impassable).
//!
//! Ties between equal `f` values are broken by binary-heap order. That order
//! is deterministic for a given sequence of pushes but is not part of the
//! contract: when several optimal paths exist, any one of them may be
//! returned.

mod astar;
mod distance;
mod pather;
mod pathfinder;
mod traits;

pub use astar::find_path;
pub use distance::{chebyshev, manhattan};
pub use pather::{Heuristic, TilePather};
pub use pathfinder::PathFinder;
pub use traits::{AstarPather, Pather};
