//! Logical input intents
//!
//! Folds raw key and touch events into {left, right} held state. A swipe
//! asserts its direction for a fixed window; expiry is evaluated against the
//! clock when the intents are sampled, so overlapping swipes simply overwrite
//! the deadline instead of racing deferred callbacks.

use crate::consts::{SWIPE_PULSE_MS, SWIPE_THRESHOLD};

/// A logical steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Held state per direction, from keys and timed swipe pulses
#[derive(Debug, Clone, Default)]
pub struct InputIntents {
    left_key: bool,
    right_key: bool,
    left_pulse_until: Option<f64>,
    right_pulse_until: Option<f64>,
}

impl InputIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// A direction key went down
    pub fn key_down(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.left_key = true,
            Direction::Right => self.right_key = true,
        }
    }

    /// A direction key was released
    pub fn key_up(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.left_key = false,
            Direction::Right => self.right_key = false,
        }
    }

    /// Classify a completed touch gesture from its horizontal travel.
    ///
    /// Gestures under the swipe threshold are ignored. A recognized swipe
    /// asserts its direction until `now_ms + SWIPE_PULSE_MS`; a repeat swipe
    /// in the same direction extends the window (latest deadline wins).
    pub fn swipe(&mut self, delta_x: f32, now_ms: f64) -> Option<Direction> {
        if delta_x.abs() <= SWIPE_THRESHOLD {
            return None;
        }

        let dir = if delta_x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        let until = now_ms + SWIPE_PULSE_MS;
        match dir {
            Direction::Left => self.left_pulse_until = Some(until),
            Direction::Right => self.right_pulse_until = Some(until),
        }
        log::debug!("swipe {:?} ({}px)", dir, delta_x);
        Some(dir)
    }

    /// Whether a direction is held at `now_ms`, by key or live pulse
    pub fn held(&self, dir: Direction, now_ms: f64) -> bool {
        let (key, pulse) = match dir {
            Direction::Left => (self.left_key, self.left_pulse_until),
            Direction::Right => (self.right_key, self.right_pulse_until),
        };
        key || pulse.is_some_and(|until| now_ms < until)
    }

    /// Drop all held state; called when a run starts
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
