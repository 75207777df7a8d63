//! Region primitives and per-kind membership tests
//!
//! Each region kind carries the parameterization used by the original scene
//! data, and the serialized form keeps its `type`-tagged shape so existing
//! room definitions load unchanged. Membership tests are inclusive of the
//! boundary and total over finite inputs: degenerate regions (zero radius,
//! zero-length corridor) simply never match, they do not panic or produce
//! NaN results.

use serde::{Deserialize, Serialize};

use crate::point::WalkPoint;

/// Half-width of a [`Region::Corridor`] in world units
///
/// The corridor coordinates were tuned against this width; it is not a
/// per-region parameter.
pub const CORRIDOR_EPSILON: f32 = 2.5;

/// One walkable-area primitive
///
/// Unrecognized `type` tags deserialize to [`Region::Unknown`], which matches
/// no point. Adding a region kind therefore never breaks existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Region {
    /// Axis-aligned rectangle
    ///
    /// `(x1, y1)` is the top corner and `(x2, y2)` the bottom corner in the
    /// map's top-down convention, so callers supply `y1 >= y2` and the y
    /// bounds test runs high-to-low.
    #[serde(rename = "rectangle")]
    Rect { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Circle given by center and radius
    #[serde(rename = "circle")]
    Circle { x: f32, y: f32, radius: f32 },

    /// Band between two concentric axis-aligned ellipses
    ///
    /// Membership uses the original tuned approximation, not a true annulus:
    /// the inner threshold is `(inner_short_radius / outer_short_radius)^2`
    /// and the radial value is normalized by the outer radii only. The
    /// inner long radius is part of the scene data but does not participate
    /// in the test.
    #[serde(rename = "ellipsRing", rename_all = "camelCase")]
    EllipseRing {
        x: f32,
        y: f32,
        inner_long_radius: f32,
        outer_long_radius: f32,
        inner_short_radius: f32,
        outer_short_radius: f32,
    },

    /// Thick line segment between two endpoints
    ///
    /// A point is inside when its perpendicular distance to the infinite
    /// line is at most [`CORRIDOR_EPSILON`] and it lies within the segment's
    /// axis-aligned bounding box inflated by the same tolerance. The
    /// inflation is what gives axis-aligned corridors their width; near the
    /// box corners of a diagonal segment it admits slightly more than a true
    /// capsule would, and the scene data relies on that.
    #[serde(rename = "line")]
    Corridor { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Catch-all for region kinds this build does not know about
    #[serde(other)]
    Unknown,
}

impl Region {
    /// Check if a point is inside or on the boundary of this region
    pub fn contains(&self, p: WalkPoint) -> bool {
        match *self {
            Region::Rect { x1, y1, x2, y2 } => {
                p.x >= x1 && p.x <= x2 && p.y <= y1 && p.y >= y2
            }
            Region::Circle { x, y, radius } => {
                (p.x - x).powi(2) + (p.y - y).powi(2) <= radius.powi(2)
            }
            Region::EllipseRing {
                x,
                y,
                outer_long_radius,
                inner_short_radius,
                outer_short_radius,
                ..
            } => {
                if outer_long_radius == 0.0 || outer_short_radius == 0.0 {
                    return false;
                }
                let inner_threshold = (inner_short_radius / outer_short_radius).powi(2);
                let normalized = ((p.x - x).powi(2) / outer_long_radius.powi(2)
                    + (p.y - y).powi(2) / outer_short_radius.powi(2))
                .sqrt();
                normalized >= inner_threshold && normalized <= 1.0
            }
            Region::Corridor { x1, y1, x2, y2 } => {
                let denominator = ((y2 - y1).powi(2) + (x2 - x1).powi(2)).sqrt();
                if denominator == 0.0 {
                    // Zero-length segment
                    return false;
                }
                let numerator = ((y2 - y1) * p.x - (x2 - x1) * p.y + (x2 * y1 - y2 * x1)).abs();
                if numerator / denominator > CORRIDOR_EPSILON {
                    return false;
                }
                x1.min(x2) - CORRIDOR_EPSILON <= p.x
                    && p.x <= x1.max(x2) + CORRIDOR_EPSILON
                    && y1.min(y2) - CORRIDOR_EPSILON <= p.y
                    && p.y <= y1.max(y2) + CORRIDOR_EPSILON
            }
            Region::Unknown => false,
        }
    }
}
