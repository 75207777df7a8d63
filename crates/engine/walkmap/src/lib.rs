//! Walkable-area geometry for point-and-click navigation scenes
//!
//! This crate provides the geometric core used to constrain actor movement
//! over a hand-tuned 2D map: a set of region primitives (rectangles, circles,
//! elliptical rings, line corridors) and a classifier that decides whether a
//! world-space point is walkable.
//!
//! The per-kind membership formulas were tuned by eye against background art
//! and are reproduced exactly; do not replace them with mathematically
//! "correct" equivalents, since that would change which positions are
//! walkable.
//!
//! # Modules
//!
//! - [`point`]: Query point type and glam conversions
//! - [`region`]: Region primitives and per-kind membership tests
//! - [`region_set`]: Ordered region collections and the walkability query

pub mod point;
pub mod region;
pub mod region_set;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use point::WalkPoint;
pub use region::{Region, CORRIDOR_EPSILON};
pub use region_set::RegionSet;
