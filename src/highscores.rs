//! High score persistence
//!
//! A single best-score value in LocalStorage. An absent entry compares as
//! zero, so the first positive score always sets a record and a zero-score
//! run never writes.

/// The persisted best run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: Option<u32>,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "lane_rush_highscore";

    /// An empty record
    pub fn new() -> Self {
        Self { best: None }
    }

    /// The stored best, if any run has ever been recorded
    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Whether `score` strictly beats the stored best (absent counts as zero)
    pub fn beaten_by(&self, score: u32) -> bool {
        score > self.best.unwrap_or(0)
    }

    /// Record `score` if it beats the stored best; returns true on a new
    /// record
    pub fn record(&mut self, score: u32) -> bool {
        if !self.beaten_by(score) {
            return false;
        }
        self.best = Some(score);
        true
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<u32>(&json) {
                    log::info!("Loaded high score {}", best);
                    return Self { best: Some(best) };
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(best) = self.best else {
            return;
        };

        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&best) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved ({})", best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
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
    fn test_absent_record_behaves_as_zero() {
        let empty = HighScore::new();
        assert_eq!(empty.best(), None);
        assert!(empty.beaten_by(1));
        assert!(!empty.beaten_by(0));
    }

    #[test]
    fn test_record_requires_strict_improvement() {
        let mut hs = HighScore::new();
        assert!(hs.record(50));
        assert_eq!(hs.best(), Some(50));

        assert!(!hs.record(50));
        assert!(!hs.record(30));
        assert_eq!(hs.best(), Some(50));

        assert!(hs.record(51));
        assert_eq!(hs.best(), Some(51));
    }

    #[test]
    fn test_zero_score_never_records() {
        let mut hs = HighScore::new();
        assert!(!hs.record(0));
        assert_eq!(hs.best(), None);
    }
}
