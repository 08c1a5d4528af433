//! High score persistence
//!
//! A store holds one non-negative integer. Reads fall back to 0 and writes are
//! best-effort: neither ever reports failure to the caller, so the game stays
//! playable on a read-only or sandboxed filesystem.

mod file;

pub use file::FileStore;

/// Durable home for the best score
pub trait HighScoreStore {
    /// Stored value, or 0 when absent or unreadable
    fn load(&self) -> u64;

    /// Overwrite the stored value; failures are swallowed
    fn save(&mut self, value: u64);
}

/// In-process store (tests, headless runs without a writable disk)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: u64,
    saves: u32,
}

impl MemoryStore {
    pub fn new(value: u64) -> Self {
        Self { value, saves: 0 }
    }

    /// Number of `save` calls seen so far
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u64 {
        self.value
    }

    fn save(&mut self, value: u64) {
        self.value = value;
        self.saves += 1;
    }
}
