//! Per-tick kinematic integrator gated by walkability
//!
//! Each tick the walker proposes `position + direction * speed` and commits
//! it only when the walkmap classifier accepts the new position. A rejected
//! move is discarded whole for that tick; there is no sliding or clamping to
//! the region boundary. With no keys held the walker steps toward its
//! point-and-click target, when one is set, under the same gate.

use glam::Vec2;
use tracing::debug;
use walkmap::RegionSet;

use crate::input::MoveInput;

/// Distance covered per tick while walking, in world units
pub const WALK_SPEED: f32 = 0.4;
/// Distance covered per tick while sprinting
pub const SPRINT_SPEED: f32 = 0.8;

/// Distance at which a move target counts as reached
const ARRIVE_DISTANCE: f32 = 0.1;

/// A player actor constrained to walkable geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Walker {
    position: Vec2,
    walk_speed: f32,
    sprint_speed: f32,
    target: Option<Vec2>,
}

impl Walker {
    /// Create a walker at a spawn position with the default speeds
    pub fn new(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            target: None,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Active point-and-click target, if any
    pub fn target(&self) -> Option<Vec2> {
        self.target
    }

    /// Set the point-and-click move target
    ///
    /// The walker steps toward it on idle ticks until it arrives or a step
    /// is blocked.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Drop the active move target
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Teleport to a position without a walkability check
    ///
    /// Used by room transitions, which place the walker on the new room's
    /// spawn point.
    pub fn place(&mut self, position: Vec2) {
        self.position = position;
        self.target = None;
    }

    fn speed(&self, input: &MoveInput) -> f32 {
        if input.sprint {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    /// Advance one tick
    ///
    /// Held keys take priority over the click target. Returns `true` when
    /// the position changed.
    pub fn step(&mut self, input: &MoveInput, map: &RegionSet) -> bool {
        let direction = input.direction();
        if direction != Vec2::ZERO {
            return self.try_move(self.position + direction * self.speed(input), map);
        }

        if let Some(target) = self.target {
            let delta = target - self.position;
            let distance = delta.length();
            if distance < ARRIVE_DISTANCE {
                // Arrival snap goes through the same gate as every other
                // commit; an unwalkable target is dropped without moving
                self.target = None;
                return self.try_move(target, map);
            }

            let step = delta / distance * distance.min(self.speed(input));
            let moved = self.try_move(self.position + step, map);
            if !moved {
                // A blocked path will not unblock itself; stop trying
                self.target = None;
            }
            return moved;
        }

        false
    }

    fn try_move(&mut self, proposed: Vec2, map: &RegionSet) -> bool {
        if map.is_walkable(proposed.into()) {
            self.position = proposed;
            true
        } else {
            debug!(x = proposed.x, y = proposed.y, "move blocked");
            false
        }
    }
}
