//! Game state and entity models
//!
//! Player position is its top-left corner; enemy and orb positions are
//! centres. Everything lives inside `[0, arena_width] × [0, arena_height]`
//! except freshly spawned enemies, which start just past an edge.

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::palette;
use crate::finalize_score;
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Gap between an orb and its glow ring
const ORB_RING_PAD: f32 = 5.0;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Player was caught; frozen until restart
    GameOver,
}

/// Things that happened during the last tick, for presentation and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Restarted,
    EnemySpawned { max_speed: f32 },
    OrbSpawned,
    /// Orb timer fired while at the orb cap; the slot is lost
    OrbSlotMissed,
    OrbCollected,
    GameOver { score: u64 },
    NewHighScore { score: u64 },
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub alive: bool,
}

impl Player {
    /// New player centred in the arena
    pub fn new(tuning: &Tuning) -> Self {
        let size = tuning.player_size;
        Self {
            pos: tuning.arena_center() - Vec2::splat(size * 0.5),
            size,
            alive: true,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    /// Move by the input direction (normalized, so diagonals aren't faster)
    /// and keep the whole square inside the arena
    pub fn update(&mut self, axis: IVec2, dt: f32, tuning: &Tuning) {
        let dir = axis.clamp(IVec2::NEG_ONE, IVec2::ONE).as_vec2().normalize_or_zero();
        self.pos += dir * tuning.player_speed * dt;

        let max = (tuning.arena() - Vec2::splat(self.size)).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

/// Arena edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Centre
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Hard cap on velocity magnitude, fixed at spawn
    pub max_speed: f32,
    /// Velocity gained toward the target per normalized frame
    pub accel: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, max_speed: f32, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: tuning.enemy_size,
            max_speed,
            accel: tuning.enemy_accel,
        }
    }

    /// Spawn just outside a random edge. Later spawns (higher `frames`) get
    /// a higher speed cap.
    pub fn spawn<R: Rng>(rng: &mut R, tuning: &Tuning, frames: u64) -> Self {
        let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];
        Self::spawn_on_edge(rng, tuning, frames, edge)
    }

    pub fn spawn_on_edge<R: Rng>(
        rng: &mut R,
        tuning: &Tuning,
        frames: u64,
        edge: SpawnEdge,
    ) -> Self {
        let (w, h) = (tuning.arena_width, tuning.arena_height);
        let off = tuning.enemy_size;
        let pos = match edge {
            SpawnEdge::Left => Vec2::new(-off, rng.random_range(0.0..=h)),
            SpawnEdge::Right => Vec2::new(w + off, rng.random_range(0.0..=h)),
            SpawnEdge::Top => Vec2::new(rng.random_range(0.0..=w), -off),
            SpawnEdge::Bottom => Vec2::new(rng.random_range(0.0..=w), h + off),
        };
        let base = rng.random_range(tuning.enemy_speed_min..=tuning.enemy_speed_max);
        let max_speed = base + frames as f32 * tuning.enemy_speed_ramp;
        Self::new(pos, max_speed, tuning)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    /// Accelerate toward `target` at full rate, clamp to `max_speed`, then
    /// translate scaled by `slow`. Slow motion only affects translation.
    pub fn update(&mut self, target: Vec2, dt: f32, slow: f32) {
        let dir = (target - self.pos).normalize_or_zero();
        self.vel += dir * self.accel * dt;

        let speed = self.vel.length();
        if speed > self.max_speed {
            self.vel = self.vel / speed * self.max_speed;
        }

        self.pos += self.vel * dt * slow;
    }
}

/// A time-slow pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    /// Centre
    pub pos: Vec2,
    pub size: f32,
    /// Cosmetic pulse phase, advanced by dt
    pub phase: f32,
}

impl Orb {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            size: tuning.orb_size,
            phase: 0.0,
        }
    }

    /// Spawn somewhere inside the arena, away from the edges
    pub fn spawn<R: Rng>(rng: &mut R, tuning: &Tuning) -> Self {
        let inset = tuning.orb_inset;
        let x = rng.random_range(inset..=(tuning.arena_width - inset).max(inset));
        let y = rng.random_range(inset..=(tuning.arena_height - inset).max(inset));
        Self::new(Vec2::new(x, y), tuning)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }

    pub fn update(&mut self, dt: f32) {
        self.phase += dt;
    }

    /// Glow ring intensity for the pulse effect
    pub fn glow(&self) -> u8 {
        (80.0 + 40.0 * (self.phase / 10.0).sin()).max(0.0) as u8
    }
}

/// Complete game state. Owned and mutated only by `tick`; presentation reads
/// it through `view`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    /// Append-only within a round
    pub enemies: Vec<Enemy>,
    pub orbs: Vec<Orb>,
    /// Running score; only ever grows while playing
    pub score: f64,
    /// Frame ticks this round
    pub frames: u64,
    /// Frame ticks since the last enemy spawn
    pub enemy_timer: u32,
    /// Frame ticks since the last orb spawn attempt
    pub orb_timer: u32,
    /// Frames of slow motion left
    pub slow_remaining: u32,
    /// Enemy translation multiplier for the current frame
    pub slow_factor: f32,
    pub phase: GamePhase,
    pub high: HighScore,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh round with `high_score` carried in from storage
    pub fn new(seed: u64, tuning: Tuning, high_score: u64) -> Self {
        Self {
            player: Player::new(&tuning),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            enemies: Vec::new(),
            orbs: Vec::new(),
            score: 0.0,
            frames: 0,
            enemy_timer: 0,
            orb_timer: 0,
            slow_remaining: 0,
            slow_factor: 1.0,
            phase: GamePhase::Playing,
            high: HighScore::new(high_score),
            events: Vec::new(),
        }
    }

    /// Reset everything about the round. The best score survives.
    pub fn restart(&mut self) {
        self.player = Player::new(&self.tuning);
        self.enemies.clear();
        self.orbs.clear();
        self.score = 0.0;
        self.frames = 0;
        self.enemy_timer = 0;
        self.orb_timer = 0;
        self.slow_remaining = 0;
        self.slow_factor = 1.0;
        self.phase = GamePhase::Playing;
        self.high.clear_new_high();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score as displayed and persisted
    pub fn final_score(&self) -> u64 {
        finalize_score(self.score)
    }

    pub fn high_score(&self) -> u64 {
        self.high.best
    }

    pub fn is_slowed(&self) -> bool {
        self.slow_remaining > 0
    }

    /// Slow-motion time left as a percentage of a full pickup
    pub fn slow_percent(&self) -> Option<u32> {
        if self.slow_remaining == 0 || self.tuning.slow_time == 0 {
            return None;
        }
        Some((u64::from(self.slow_remaining) * 100 / u64::from(self.tuning.slow_time)) as u32)
    }

    /// Everything presentation needs to draw this frame
    pub fn view(&self) -> FrameView {
        let player_color = if self.player.alive {
            palette::PLAYER
        } else {
            palette::PLAYER_DEAD
        };
        FrameView {
            arena: self.tuning.arena(),
            player: RectView::new(self.player.bounds(), player_color),
            player_alive: self.player.alive,
            enemies: self
                .enemies
                .iter()
                .map(|e| RectView::new(e.bounds(), palette::ENEMY))
                .collect(),
            orbs: self
                .orbs
                .iter()
                .map(|o| {
                    let glow = o.glow();
                    OrbView {
                        rect: RectView::new(o.bounds(), palette::ORB),
                        ring: RectView::new(o.bounds().inflate(ORB_RING_PAD), [glow, 255, glow]),
                        glow,
                    }
                })
                .collect(),
            score: self.final_score(),
            high_score: self.high.best,
            slow_percent: self.slow_percent(),
            game_over: self.is_game_over(),
            new_high: self.high.new_high,
        }
    }
}

/// A coloured rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectView {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: [u8; 3],
}

impl RectView {
    fn new(bounds: Aabb, color: [u8; 3]) -> Self {
        let size = bounds.size();
        Self {
            x: bounds.min.x,
            y: bounds.min.y,
            w: size.x,
            h: size.y,
            color,
        }
    }
}

/// An orb plus its pulsing outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbView {
    pub rect: RectView,
    /// Outline drawn around the orb, coloured `[glow, 255, glow]`
    pub ring: RectView,
    pub glow: u8,
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub arena: Vec2,
    pub player: RectView,
    pub player_alive: bool,
    pub enemies: Vec<RectView>,
    pub orbs: Vec<OrbView>,
    pub score: u64,
    pub high_score: u64,
    /// Present only while slowed
    pub slow_percent: Option<u32>,
    pub game_over: bool,
    pub new_high: bool,
}
