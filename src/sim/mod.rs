//! Game simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, so a seed plus an input sequence replays exactly
//! - No rendering, windowing or clock dependencies
//! - Persistence only through an injected `HighScoreStore`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{
    Enemy, FrameView, GameEvent, GamePhase, GameState, Orb, OrbView, Player, RectView, SpawnEdge,
};
pub use tick::{TickInput, tick};
