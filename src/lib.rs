//! Vector Dodge - a single-screen arcade survival game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (player, enemies, orbs, collisions, score)
//! - `clock`: Wall-clock to normalized delta-time conversion
//! - `persistence`: Best-effort high score storage
//! - `highscores`: High score ratchet on top of a store
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime settings file
//! - `autopilot`: Scripted input for the headless driver

pub mod autopilot;
pub mod clock;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use clock::Clock;
pub use highscores::HighScore;
pub use persistence::{FileStore, HighScoreStore, MemoryStore};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Update rate that one unit of normalized dt corresponds to
    pub const BASELINE_FPS: f32 = 60.0;
    /// Milliseconds in one baseline frame
    pub const BASELINE_FRAME_MS: f32 = 1000.0 / BASELINE_FPS;

    /// Default settings file, looked up in the working directory
    pub const SETTINGS_FILE: &str = "vector_dodge_settings.json";
    /// Default high score file
    pub const HIGHSCORE_FILE: &str = "vector_dodge_highscore.txt";

    /// Tolerance added before truncating the real-valued score
    pub const SCORE_EPSILON: f64 = 1e-6;

    /// Render palette (RGB)
    pub mod palette {
        pub const PLAYER: [u8; 3] = [90, 200, 255];
        pub const PLAYER_DEAD: [u8; 3] = [200, 70, 90];
        pub const ENEMY: [u8; 3] = [255, 90, 120];
        pub const ORB: [u8; 3] = [130, 255, 150];
    }
}

/// Truncate a running score to the integer that gets shown and persisted
#[inline]
pub fn finalize_score(score: f64) -> u64 {
    (score + consts::SCORE_EPSILON).max(0.0).floor() as u64
}
