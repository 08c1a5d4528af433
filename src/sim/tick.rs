//! Per-frame simulation step
//!
//! Two timing domains run side by side:
//! - frame ticks (`frames`, spawn timers, slow-motion countdown) advance by
//!   exactly one per `tick` call, whatever dt is
//! - continuous quantities (movement, enemy acceleration, orb phase) scale
//!   by dt
//!
//! Spawn cadence therefore follows the update rate, not wall time.

use glam::IVec2;

use super::state::{Enemy, GameEvent, GamePhase, GameState, Orb};
use crate::persistence::HighScoreStore;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal: right minus left; vertical: down minus up. Each in {-1, 0, 1}.
    pub axis: IVec2,
    /// Restart the round (edge-triggered)
    pub restart: bool,
}

impl TickInput {
    /// Build from opposed key pairs
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool, restart: bool) -> Self {
        Self {
            axis: IVec2::new(right as i32 - left as i32, down as i32 - up as i32),
            restart,
        }
    }

    pub fn moving(axis: IVec2) -> Self {
        Self {
            axis,
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            axis: IVec2::ZERO,
            restart: true,
        }
    }
}

/// Advance the game by one frame. `dt` is in baseline frames (1.0 = 1/60 s).
/// A new high score is written through `store` the moment the round ends.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, store: &mut dyn HighScoreStore) {
    state.events.clear();

    if input.restart {
        state.restart();
        state.events.push(GameEvent::Restarted);
        log::info!("Round restarted (high score {})", state.high.best);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frames += 1;

    // Score accrues at the slowed rate while slow motion is still active
    let score_scale = if state.slow_remaining > 0 {
        state.tuning.slow_factor as f64
    } else {
        1.0
    };
    state.score += state.tuning.score_per_frame * score_scale;

    state.player.update(input.axis, dt, &state.tuning);

    spawn_enemies(state);
    spawn_orbs(state);

    if state.slow_remaining > 0 {
        state.slow_remaining -= 1;
    }
    state.slow_factor = if state.slow_remaining > 0 {
        state.tuning.slow_factor
    } else {
        1.0
    };

    let target = state.player.center();
    let slow = state.slow_factor;
    for enemy in &mut state.enemies {
        enemy.update(target, dt, slow);
    }

    check_enemy_hits(state, store);
    collect_orbs(state, dt);
}

fn spawn_enemies(state: &mut GameState) {
    state.enemy_timer += 1;
    if state.enemy_timer < state.tuning.enemy_spawn_every {
        return;
    }
    state.enemy_timer = 0;

    let enemy = Enemy::spawn(&mut state.rng, &state.tuning, state.frames);
    log::debug!(
        "Enemy #{} spawned at ({:.0}, {:.0}), max speed {:.2}",
        state.enemies.len() + 1,
        enemy.pos.x,
        enemy.pos.y,
        enemy.max_speed
    );
    state.events.push(GameEvent::EnemySpawned {
        max_speed: enemy.max_speed,
    });
    state.enemies.push(enemy);
}

/// The timer resets whenever it fires. At the cap the slot is simply lost;
/// it is not carried over to the next frame.
fn spawn_orbs(state: &mut GameState) {
    state.orb_timer += 1;
    if state.orb_timer < state.tuning.orb_spawn_every {
        return;
    }
    state.orb_timer = 0;

    if state.orbs.len() >= state.tuning.max_orbs {
        log::debug!("Orb slot missed ({} alive)", state.orbs.len());
        state.events.push(GameEvent::OrbSlotMissed);
        return;
    }

    let orb = Orb::spawn(&mut state.rng, &state.tuning);
    log::debug!("Orb spawned at ({:.0}, {:.0})", orb.pos.x, orb.pos.y);
    state.events.push(GameEvent::OrbSpawned);
    state.orbs.push(orb);
}

fn check_enemy_hits(state: &mut GameState, store: &mut dyn HighScoreStore) {
    let player = state.player.bounds();
    if !state.enemies.iter().any(|e| e.bounds().overlaps(&player)) {
        return;
    }

    state.player.alive = false;
    state.phase = GamePhase::GameOver;

    let final_score = state.final_score();
    log::info!(
        "Game over after {} frames: score {} ({} enemies)",
        state.frames,
        final_score,
        state.enemies.len()
    );
    state.events.push(GameEvent::GameOver { score: final_score });

    if state.high.submit(final_score, store) {
        state.events.push(GameEvent::NewHighScore { score: final_score });
    }
}

fn collect_orbs(state: &mut GameState, dt: f32) {
    let player = state.player.bounds();
    let before = state.orbs.len();

    state.orbs.retain_mut(|orb| {
        orb.update(dt);
        !orb.bounds().overlaps(&player)
    });

    let collected = before - state.orbs.len();
    if collected == 0 {
        return;
    }

    // Overwrite, not extend
    state.slow_remaining = state.tuning.slow_time;
    for _ in 0..collected {
        state.events.push(GameEvent::OrbCollected);
    }
    log::debug!("Orb collected, time slowed for {} frames", state.slow_remaining);
}
