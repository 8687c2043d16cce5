//! Game state and core simulation types
//!
//! One `GameState` per run, owned by the frame driver's caller and passed
//! `&mut` into every update step. No ambient globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first run, or after a game over
    Idle,
    /// Active gameplay
    Running,
    /// Run frozen mid-flight; no tick mutates state
    Paused,
    /// Run ended by a collision; restart required
    GameOver,
}

/// Visible play-area geometry, captured once when a run starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// The player's car
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner of the car
    pub pos: Vec2,
    /// Scroll speed applied to markers and obstacles (px per tick)
    pub scroll_speed: f32,
    /// Accrued score; non-decreasing while running
    pub score: f64,
    /// Speed shown on the HUD (km/h)
    pub display_speed: u32,
    /// Last score checkpoint that already triggered a speed-up
    pub last_checkpoint: u32,
}

impl Player {
    fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            scroll_speed: 0.0,
            score: 0.0,
            display_speed: 0,
            last_checkpoint: 0,
        }
    }

    fn reset(&mut self, viewport: Viewport, tuning: &Tuning) {
        self.pos = Vec2::new(
            (viewport.width - PLAYER_WIDTH) / 2.0,
            viewport.height - PLAYER_BOTTOM_MARGIN,
        );
        self.scroll_speed = tuning.start_scroll_speed;
        self.score = 0.0;
        self.display_speed = tuning.start_display_speed;
        self.last_checkpoint = 0;
    }

    /// Bounding box of the car at its current position
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// A decorative scrolling lane marker; no collision role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneMarker {
    pub y: f32,
}

/// An oncoming car; contact ends the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Body paint, 0xRRGGBB
    pub color: u32,
}

impl Obstacle {
    /// Bounding box at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn/respawn randomization
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Tick counter for the current run
    pub time_ticks: u64,
    /// Play-area geometry for the current run
    pub viewport: Viewport,
    /// Balance values
    pub tuning: Tuning,
    /// The player's car (exactly one instance)
    pub player: Player,
    /// Scrolling lane markers (fixed pool, recycled in place)
    pub lane_markers: Vec<LaneMarker>,
    /// Oncoming obstacles (fixed pool, recycled in place)
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create an idle game; no entities exist until [`GameState::start`]
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            time_ticks: 0,
            viewport,
            tuning,
            player: Player::idle(),
            lane_markers: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    /// Begin a run: reset player stats, rebuild both entity pools, go Running.
    ///
    /// Valid from any phase - Idle before the first run, GameOver for a
    /// restart.
    pub fn start(&mut self) {
        self.player.reset(self.viewport, &self.tuning);
        self.time_ticks = 0;
        self.spawn_lane_markers();
        self.spawn_obstacles();
        self.phase = GamePhase::Running;
        log::info!("run started (seed {})", self.seed);
    }

    /// True while a run is actively ticking
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Score as shown to the player
    pub fn final_score(&self) -> u32 {
        self.player.score.floor() as u32
    }

    fn spawn_lane_markers(&mut self) {
        self.lane_markers.clear();
        for i in 0..LANE_MARKER_COUNT {
            self.lane_markers.push(LaneMarker {
                y: i as f32 * LANE_MARKER_SPACING,
            });
        }
    }

    fn spawn_obstacles(&mut self) {
        self.obstacles.clear();
        for i in 0..OBSTACLE_COUNT {
            let x = self.random_lane_x();
            let color = self.random_color();
            self.obstacles.push(Obstacle {
                pos: Vec2::new(x, -((i + 1) as f32) * OBSTACLE_SPAWN_GAP),
                color,
            });
        }
    }

    /// Uniformly random horizontal position keeping an obstacle fully on-road
    pub fn random_lane_x(&mut self) -> f32 {
        let max_x = (self.viewport.width - OBSTACLE_WIDTH).max(1.0);
        self.rng.random_range(0.0..max_x).floor()
    }

    /// Uniformly random body color
    pub fn random_color(&mut self) -> u32 {
        self.rng.random_range(0..0x0100_0000u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            width: 400.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_new_game_is_idle_and_empty() {
        let state = GameState::new(7, viewport(), Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.lane_markers.is_empty());
        assert!(state.obstacles.is_empty());
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_builds_pools_and_centers_player() {
        let mut state = GameState::new(7, viewport(), Tuning::default());
        state.start();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lane_markers.len(), LANE_MARKER_COUNT);
        for (i, marker) in state.lane_markers.iter().enumerate() {
            assert_eq!(marker.y, i as f32 * LANE_MARKER_SPACING);
        }

        assert_eq!(state.obstacles.len(), OBSTACLE_COUNT);
        for (i, obstacle) in state.obstacles.iter().enumerate() {
            assert_eq!(obstacle.pos.y, -((i + 1) as f32) * OBSTACLE_SPAWN_GAP);
            assert!(obstacle.pos.x >= 0.0);
            assert!(obstacle.pos.x < 400.0 - OBSTACLE_WIDTH);
            assert!(obstacle.color <= 0xFF_FFFF);
        }

        assert_eq!(state.player.pos.x, (400.0 - PLAYER_WIDTH) / 2.0);
        assert_eq!(state.player.pos.y, 600.0 - PLAYER_BOTTOM_MARGIN);
        assert_eq!(state.player.scroll_speed, 5.0);
        assert_eq!(state.player.display_speed, 30);
        assert_eq!(state.player.score, 0.0);
        assert_eq!(state.player.last_checkpoint, 0);
    }

    #[test]
    fn test_restart_after_game_over_resets_stats() {
        let mut state = GameState::new(7, viewport(), Tuning::default());
        state.start();
        state.player.score = 123.4;
        state.player.scroll_speed = 7.5;
        state.player.last_checkpoint = 100;
        state.phase = GamePhase::GameOver;

        state.start();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.score, 0.0);
        assert_eq!(state.player.scroll_speed, 5.0);
        assert_eq!(state.player.last_checkpoint, 0);
    }

    #[test]
    fn test_same_seed_spawns_identical_obstacles() {
        let mut a = GameState::new(42, viewport(), Tuning::default());
        let mut b = GameState::new(42, viewport(), Tuning::default());
        a.start();
        b.start();
        assert_eq!(a.obstacles, b.obstacles);
    }
}
