//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per frame callback
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides};
pub use state::{GamePhase, GameState, LaneMarker, Obstacle, Player, Viewport};
pub use tick::{TickInput, tick};
