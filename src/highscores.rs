//! High score ratchet
//!
//! The best score only ever goes up. A round's final score is submitted once,
//! and only a strictly better score is written through to the store.

use serde::{Deserialize, Serialize};

use crate::persistence::HighScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Best finalized score seen (persisted or from this session)
    pub best: u64,
    /// Set when the most recent round beat `best`; cleared on restart
    pub new_high: bool,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self {
            best,
            new_high: false,
        }
    }

    /// Seed from whatever the store currently holds
    pub fn load(store: &dyn HighScoreStore) -> Self {
        Self::new(store.load())
    }

    /// Submit a round's final score. Returns true (and persists) when it
    /// strictly beats the current best.
    pub fn submit(&mut self, score: u64, store: &mut dyn HighScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.new_high = true;
        store.save(score);
        log::info!("New high score: {}", score);
        true
    }

    /// Start of a new round: forget the banner, keep the best
    pub fn clear_new_high(&mut self) {
        self.new_high = false;
    }
}
