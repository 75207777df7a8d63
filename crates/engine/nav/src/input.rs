//! Held-key state and direction derivation
//!
//! Mirrors the browser scene's WASD handling: each axis contributes a unit
//! component while held, opposing keys cancel, and the summed vector is
//! normalized so diagonals are not faster.

use glam::Vec2;

/// Held-key movement state for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveInput {
    /// W / ArrowUp held (+y)
    pub forward: bool,
    /// S / ArrowDown held (-y)
    pub backward: bool,
    /// A / ArrowLeft held (-x)
    pub left: bool,
    /// D / ArrowRight held (+x)
    pub right: bool,
    /// Shift held; doubles the walk speed
    pub sprint: bool,
}

impl MoveInput {
    /// State with no keys held
    pub fn idle() -> Self {
        Self::default()
    }

    /// True when no movement key is held
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// Normalized movement direction for the held keys
    ///
    /// Returns `Vec2::ZERO` when idle or when opposing keys cancel out.
    pub fn direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.forward {
            direction.y += 1.0;
        }
        if self.backward {
            direction.y -= 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }

        if direction != Vec2::ZERO {
            direction = direction.normalize();
        }
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_direction() {
        assert_eq!(MoveInput::idle().direction(), Vec2::ZERO);
        assert!(MoveInput::idle().is_idle());
    }

    #[test]
    fn test_single_axis() {
        let input = MoveInput {
            forward: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(0.0, 1.0));

        let input = MoveInput {
            left: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let input = MoveInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = input.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = MoveInput {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::ZERO);
        assert!(!input.is_idle());
    }
}
