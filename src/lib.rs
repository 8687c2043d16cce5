//! Lane Rush - an endless lane-dodging driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, collisions, game state)
//! - `input`: Logical input intents from keys and swipe gestures
//! - `renderer`: Scene-graph abstraction (DOM-backed on web)
//! - `highscores`: Best-run persistence
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Player car footprint (css pixels)
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;

    /// Obstacle car footprint
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 100.0;

    /// Scrolling lane-marker pool size
    pub const LANE_MARKER_COUNT: usize = 10;
    /// Vertical spacing between lane markers at spawn
    pub const LANE_MARKER_SPACING: f32 = 150.0;
    /// Headroom above the viewport when a marker wraps back to the top
    pub const LANE_OVERSCAN: f32 = 100.0;

    /// Obstacle pool size
    pub const OBSTACLE_COUNT: usize = 3;
    /// Vertical gap between obstacles at spawn (row i starts at -(i+1) * gap)
    pub const OBSTACLE_SPAWN_GAP: f32 = 600.0;
    /// Where a recycled obstacle re-enters, far above the viewport
    pub const OBSTACLE_RESET_Y: f32 = -600.0;

    /// Distance from the viewport floor to the player's top edge
    pub const PLAYER_BOTTOM_MARGIN: f32 = 120.0;

    /// Minimum horizontal travel for a touch gesture to count as a swipe
    pub const SWIPE_THRESHOLD: f32 = 30.0;
    /// How long a swipe keeps its direction asserted (ms)
    pub const SWIPE_PULSE_MS: f64 = 200.0;
}
