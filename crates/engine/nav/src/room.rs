//! Named scenes bundling spawn point and walkable geometry
//!
//! A [`Room`] is the unit of scene transition: entering a room replaces the
//! active region set wholesale and places the walker on the room's spawn
//! point. The two built-in rooms carry the hand-tuned coordinates from the
//! original scene setup; additional rooms load from JSON files using the
//! same `type`-tagged region shape.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use walkmap::{Region, RegionSet, WalkPoint};

/// Errors raised while loading room definitions
#[derive(Error, Debug)]
pub enum RoomError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed room JSON
    #[error("room parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Requested built-in room does not exist
    #[error("unknown room: {0}")]
    UnknownRoom(String),
}

/// A navigable scene: display name, spawn point, walkable geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier used by scene transitions
    pub name: String,
    /// Where the walker is placed on entry
    pub spawn: Vec2,
    /// Walkable geometry for this room
    pub regions: RegionSet,
}

impl Room {
    /// Look up a built-in room by name
    pub fn builtin(name: &str) -> Result<Self, RoomError> {
        match name {
            "hub" => Ok(Self::hub()),
            "exhibit" => Ok(Self::exhibit()),
            other => Err(RoomError::UnknownRoom(other.to_string())),
        }
    }

    /// Parse a room from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, RoomError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a room definition from a JSON file
    pub fn load(path: &Path) -> Result<Self, RoomError> {
        let text = fs::read_to_string(path)?;
        let room = Self::from_json_str(&text)?;
        debug!(room = %room.name, regions = room.regions.len(), "loaded room");
        Ok(room)
    }

    /// Check if a point is walkable in this room
    pub fn is_walkable(&self, p: WalkPoint) -> bool {
        self.regions.is_walkable(p)
    }

    /// The outdoor hub map
    ///
    /// Walkable paths are narrow corridors between buildings plus the ring
    /// road around the center plaza. Coordinates are tuned against the hub
    /// background art; do not round them.
    pub fn hub() -> Self {
        let regions = RegionSet::new(vec![
            Region::Corridor { x1: -29.07, y1: -1.62, x2: 72.30, y2: -64.03 },
            Region::Corridor { x1: -29.07, y1: -1.62, x2: -1.42, y2: 16.20 },
            Region::Corridor { x1: -1.42, y1: 16.20, x2: -67.02, y2: 54.60 },
            Region::Corridor { x1: -8.87, y1: -15.66, x2: -57.22, y2: -45.67 },
            Region::Corridor { x1: 12.34, y1: -27.96, x2: 68.54, y2: 6.15 },
            Region::Corridor { x1: 41.05, y1: -10.46, x2: 74.8, y2: -31.82 },
            Region::Corridor { x1: 49.31, y1: 56.02, x2: 27.24, y2: 41.65 },
            Region::Corridor { x1: -55.05, y1: 48.65, x2: -10.14, y2: 22.14 },
            Region::Corridor { x1: -55.98, y1: 47.05, x2: -39.7, y2: 58.37 },
            Region::EllipseRing {
                x: 1.13,
                y: 5.81,
                inner_long_radius: 95.8,
                outer_long_radius: 96.6,
                inner_short_radius: 62.2,
                outer_short_radius: 65.4,
            },
        ]);
        Self {
            name: "hub".to_string(),
            spawn: Vec2::new(-8.87, -15.66),
            regions,
        }
    }

    /// The indoor exhibit room
    ///
    /// Aisles along the walls plus overlapping floor rectangles covering the
    /// open exhibition area.
    pub fn exhibit() -> Self {
        let regions = RegionSet::new(vec![
            Region::Corridor { x1: 0.0, y1: 0.0, x2: 0.0, y2: -62.80 },
            Region::Corridor { x1: 0.0, y1: 0.0, x2: -25.20, y2: 0.0 },
            Region::Corridor { x1: -25.20, y1: 0.0, x2: -25.60, y2: -52.40 },
            Region::Corridor { x1: -28.41, y1: -35.19, x2: -58.46, y2: -17.14 },
            Region::Rect { x1: -14.80, y1: -27.2, x2: 51.52, y2: -46.32 },
            Region::Rect { x1: -15.28, y1: -46.72, x2: 31.12, y2: -57.12 },
            Region::Rect { x1: -15.28, y1: -46.72, x2: 15.92, y2: -64.32 },
            Region::Rect { x1: -0.57, y1: -11.83, x2: 21.12, y2: -59.92 },
            Region::Rect { x1: -14.60, y1: -41.82, x2: 30.99, y2: -56.22 },
            Region::Rect { x1: 26.38, y1: -44.78, x2: 37.17, y2: -53.17 },
            Region::Rect { x1: 32.00, y1: -30.80, x2: 61.20, y2: -42.40 },
            Region::Rect { x1: 4.61, y1: -17.13, x2: 32.35, y2: -33.21 },
            Region::Rect { x1: -30.0, y1: -2.4, x2: 8.8, y2: -12.4 },
            Region::Rect { x1: -33.2, y1: -3.2, x2: -24.31, y2: -42.49 },
            Region::Rect { x1: -31.77, y1: -27.37, x2: 8.63, y2: -53.37 },
            Region::Rect { x1: 0.40, y1: -57.12, x2: 22.8, y2: -27.20 },
            Region::Rect { x1: 27.2, y1: -26.0, x2: 53.18, y2: -47.11 },
        ]);
        Self {
            name: "exhibit".to_string(),
            spawn: Vec2::new(0.0, 0.0),
            regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(Room::builtin("hub").unwrap().name, "hub");
        assert_eq!(Room::builtin("exhibit").unwrap().name, "exhibit");
        assert!(matches!(
            Room::builtin("basement"),
            Err(RoomError::UnknownRoom(_))
        ));
    }

    #[test]
    fn test_hub_spawn_is_walkable() {
        let hub = Room::hub();
        assert!(hub.is_walkable(WalkPoint::from_vec2(hub.spawn)));
    }

    #[test]
    fn test_exhibit_spawn_is_walkable() {
        let exhibit = Room::exhibit();
        assert!(exhibit.is_walkable(WalkPoint::from_vec2(exhibit.spawn)));
    }

    #[test]
    fn test_exhibit_aisle_and_floor() {
        let exhibit = Room::exhibit();
        // Down the entry aisle
        assert!(exhibit.is_walkable(WalkPoint::new(1.0, -30.0)));
        // Off the aisle but on a floor rectangle
        assert!(exhibit.is_walkable(WalkPoint::new(40.0, -35.0)));
        // Far corner outside every region
        assert!(!exhibit.is_walkable(WalkPoint::new(80.0, 40.0)));
    }

    #[test]
    fn test_hub_ring_road() {
        let hub = Room::hub();
        // On the ring road east of the plaza
        assert!(hub.is_walkable(WalkPoint::new(1.13 + 96.0, 5.81)));
        // Center of the plaza is not walkable
        assert!(!hub.is_walkable(WalkPoint::new(1.13, 5.81)));
    }

    #[test]
    fn test_room_json_round_trip() {
        let hub = Room::hub();
        let json = serde_json::to_string(&hub).unwrap();
        let back = Room::from_json_str(&json).unwrap();
        assert_eq!(back, hub);
    }

    #[test]
    fn test_room_from_original_scene_json() {
        let room = Room::from_json_str(
            r#"{
                "name": "closet",
                "spawn": [1.0, -2.0],
                "regions": [
                    { "type": "rectangle", "x1": -5, "y1": 5, "x2": 5, "y2": -5 },
                    { "type": "portal", "to": "hub" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(room.name, "closet");
        assert_eq!(room.spawn, Vec2::new(1.0, -2.0));
        assert!(room.is_walkable(WalkPoint::new(0.0, 0.0)));
        assert!(!room.is_walkable(WalkPoint::new(9.0, 0.0)));
    }
}
