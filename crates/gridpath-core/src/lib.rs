//! **gridpath-core** — foundational types for grid pathfinding.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! integer [`Point`] geometry, the [`Tile`] cell classification, and
//! [`TileMap`], an owned fixed-size 2D map of tiles. It knows nothing about
//! rendering, input, or the search itself.

pub mod map;
pub mod point;
pub mod tile;

pub use map::TileMap;
pub use point::Point;
pub use tile::Tile;
