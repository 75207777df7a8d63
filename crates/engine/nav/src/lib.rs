//! Keyboard and point-and-click movement over walkable-area maps
//!
//! This crate owns the per-tick movement rules that sit between input
//! polling and the walkmap classifier: held-key state is reduced to a
//! normalized direction, a displacement is proposed, and the move commits
//! only when the proposed position is walkable. Blocked moves are simply
//! discarded for the tick; the actor never slides along a boundary.
//!
//! # Modules
//!
//! - [`input`]: Held-key state and direction derivation
//! - [`walker`]: Per-tick kinematic integrator gated by walkability
//! - [`room`]: Named scenes bundling spawn point and walkable geometry

pub mod input;
pub mod room;
pub mod walker;

pub use input::MoveInput;
pub use room::{Room, RoomError};
pub use walker::{Walker, SPRINT_SPEED, WALK_SPEED};
