//! Data-driven game balance
//!
//! Persisted separately from high scores in LocalStorage so tweaks survive
//! reloads; absent or corrupt overrides fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Game balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speed ===
    /// Scroll speed at the start of a run (px per tick)
    pub start_scroll_speed: f32,
    /// Displayed speed at the start of a run (km/h)
    pub start_display_speed: u32,
    /// Steering speed as a multiple of the current scroll speed
    pub steer_factor: f32,

    // === Score ===
    /// Score gained every running tick
    pub score_per_tick: f64,
    /// Bonus for an obstacle scrolling past without contact
    pub avoid_bonus: f64,

    // === Checkpoints ===
    /// Score interval between speed-ups
    pub checkpoint_interval: u32,
    /// Scroll speed gained at each checkpoint (px per tick)
    pub scroll_speed_step: f32,
    /// Displayed speed gained at each checkpoint (km/h)
    pub display_speed_step: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_scroll_speed: 5.0,
            start_display_speed: 30,
            steer_factor: 2.0,

            score_per_tick: 0.1,
            avoid_bonus: 10.0,

            checkpoint_interval: 50,
            scroll_speed_step: 0.5,
            display_speed_step: 5,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "lane_rush_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning overrides from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_balance() {
        let tuning = Tuning::default();
        assert_eq!(tuning.start_scroll_speed, 5.0);
        assert_eq!(tuning.start_display_speed, 30);
        assert_eq!(tuning.score_per_tick, 0.1);
        assert_eq!(tuning.avoid_bonus, 10.0);
        assert_eq!(tuning.checkpoint_interval, 50);
        assert_eq!(tuning.scroll_speed_step, 0.5);
        assert_eq!(tuning.display_speed_step, 5);
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"avoid_bonus": 25.0}"#).unwrap();
        assert_eq!(tuning.avoid_bonus, 25.0);
        assert_eq!(tuning.checkpoint_interval, 50);
        assert_eq!(tuning.start_scroll_speed, 5.0);
    }
}
