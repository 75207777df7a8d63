//! Query point type and glam conversions
//!
//! A [`WalkPoint`] is an ephemeral world-space position handed to the
//! classifier once per tick; it carries no identity beyond its coordinates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D world-space point queried against walkable geometry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WalkPoint {
    /// X position in world units
    pub x: f32,
    /// Y position in world units
    pub y: f32,
}

impl WalkPoint {
    /// Create a new query point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from a glam Vec2
    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Convert to a glam Vec2
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Calculate distance to another point
    pub fn distance_to(&self, other: &WalkPoint) -> f32 {
        self.to_vec2().distance(other.to_vec2())
    }
}

impl From<Vec2> for WalkPoint {
    fn from(v: Vec2) -> Self {
        Self::from_vec2(v)
    }
}

impl From<WalkPoint> for Vec2 {
    fn from(p: WalkPoint) -> Self {
        p.to_vec2()
    }
}

impl From<(f32, f32)> for WalkPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}
