//! High score leaderboard
//!
//! Persisted to LocalStorage, tracks the top 10 runs by money earned.
//! Recorded by the platform layer on the GameOver transition; the
//! simulation core never touches persistence.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Money at the end of the run
    pub money: i32,
    /// Equipment collected
    pub equipment: u32,
    /// Run length in seconds
    pub duration_secs: f32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rush_lane_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run qualifies for the leaderboard
    pub fn qualifies(&self, money: i32) -> bool {
        if money <= 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| money > e.money).unwrap_or(true)
    }

    /// Add a run to the leaderboard (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify.
    pub fn add_score(
        &mut self,
        money: i32,
        equipment: u32,
        duration_secs: f32,
        timestamp: f64,
    ) -> Option<usize> {
        if !self.qualifies(money) {
            return None;
        }

        let entry = HighScoreEntry {
            money,
            equipment,
            duration_secs,
            timestamp,
        };

        // Sorted descending by money
        let pos = self.entries.iter().position(|e| money > e.money);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best money total (if any)
    pub fn top_money(&self) -> Option<i32> {
        self.entries.first().map(|e| e.money)
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
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
    fn test_losing_runs_do_not_qualify() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(!scores.qualifies(-3));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_ranking_and_truncation() {
        let mut scores = HighScores::new();
        for money in 1..=12 {
            scores.add_score(money, 0, 10.0, 0.0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_money(), Some(12));
        // Rank 1 for a new best
        assert_eq!(scores.add_score(20, 1, 30.0, 0.0), Some(1));
        // Worse than everything on a full board: rejected
        assert_eq!(scores.add_score(1, 0, 5.0, 0.0), None);
    }
}
