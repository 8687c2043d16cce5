//! Per-frame game update
//!
//! The frame driver: one call per display refresh while a run is live.
//! Ordering per tick is fixed: pause handling, lane-marker scroll/wrap,
//! per-obstacle collision -> recycle -> translate, player steering, score
//! and speed progression.
//!
//! Progression is per-tick, not delta-time scaled: a faster display refresh
//! means a faster game. The balance values assume the nominal 60 Hz refresh
//! of the target environment.

use super::collision::collides;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer left intent is held
    pub left: bool,
    /// Steer right intent is held
    pub right: bool,
    /// Pause toggle requested (one-shot)
    pub pause: bool,
}

/// Advance the game by one tick.
///
/// A pause toggle mutates only the phase and returns, so toggling twice
/// leaves the run bit-identical. Outside `Running`, ticks are no-ops.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("paused at score {}", state.final_score());
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                log::info!("resumed");
                return;
            }
            _ => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    advance_lane_markers(state);

    if advance_obstacles(state) {
        end_game(state);
        return;
    }

    steer_player(state, input);
    advance_score(state);
}

/// Scroll every lane marker, wrapping past-bottom markers back above the
/// viewport. The small fixed pool reads as an infinite road.
fn advance_lane_markers(state: &mut GameState) {
    let speed = state.player.scroll_speed;
    let height = state.viewport.height;
    for marker in &mut state.lane_markers {
        if marker.y >= height {
            marker.y -= height + LANE_OVERSCAN;
        }
        marker.y += speed;
    }
}

/// Scroll every obstacle; returns true on player contact.
///
/// Per obstacle the order matters: the collision test sees the position the
/// player saw last frame, then a past-bottom obstacle respawns far above
/// with a fresh lane and paint (paying out the avoid bonus), then the
/// per-tick translation applies.
fn advance_obstacles(state: &mut GameState) -> bool {
    let player = state.player.rect();
    let speed = state.player.scroll_speed;
    let height = state.viewport.height;

    for i in 0..state.obstacles.len() {
        if collides(&player, &state.obstacles[i].rect()) {
            return true;
        }

        if state.obstacles[i].pos.y >= height {
            let x = state.random_lane_x();
            let color = state.random_color();
            let obstacle = &mut state.obstacles[i];
            obstacle.pos.y = OBSTACLE_RESET_Y;
            obstacle.pos.x = x;
            obstacle.color = color;
            state.player.score += state.tuning.avoid_bonus;
        }

        state.obstacles[i].pos.y += speed;
    }

    false
}

/// Apply held steering intents. Guards are checked before the move and the
/// result is not re-clamped afterwards.
fn steer_player(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.steer_factor * state.player.scroll_speed;

    if input.left && state.player.pos.x > 0.0 {
        state.player.pos.x -= step;
    }
    if input.right && state.player.pos.x < state.viewport.width - PLAYER_WIDTH {
        state.player.pos.x += step;
    }
}

/// Accrue score and fire the speed checkpoint at most once per threshold.
fn advance_score(state: &mut GameState) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.score += tuning.score_per_tick;

    let s = player.score.floor() as u32;
    if s > 0 && s % tuning.checkpoint_interval == 0 && s > player.last_checkpoint {
        player.scroll_speed += tuning.scroll_speed_step;
        player.display_speed += tuning.display_speed_step;
        player.last_checkpoint = s;
        log::info!(
            "checkpoint {}: scroll speed {}, display {}km/h",
            s,
            player.scroll_speed,
            player.display_speed
        );
    }
}

fn end_game(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over: score {}, speed {}km/h",
        state.final_score(),
        state.player.display_speed
    );
}
