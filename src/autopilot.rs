//! Scripted player for the headless driver
//!
//! Potential-field steering: enemies push, the nearest orb pulls, walls push.
//! The result is quantised to the same {-1, 0, 1} axes a keyboard produces.

use glam::{IVec2, Vec2};

use crate::sim::GameState;

/// Enemies farther than this are ignored
const THREAT_RADIUS: f32 = 160.0;
/// Wall repulsion starts this close to an edge
const WALL_MARGIN: f32 = 60.0;
const ORB_PULL: f32 = 0.6;
/// Components smaller than this (relative to the largest) are dropped
const DEADZONE: f32 = 0.35;

/// Pick this frame's input axes
pub fn steer(state: &GameState) -> IVec2 {
    let me = state.player.center();
    let mut force = Vec2::ZERO;

    for enemy in &state.enemies {
        let away = me - enemy.pos;
        let dist = away.length();
        if dist < THREAT_RADIUS {
            // Inverse-square push, saturating when on top of us
            let weight = 1.0 / (dist / THREAT_RADIUS).max(0.05).powi(2);
            force += away.normalize_or_zero() * weight;
        }
    }

    if let Some(orb) = state
        .orbs
        .iter()
        .min_by(|a, b| a.pos.distance_squared(me).total_cmp(&b.pos.distance_squared(me)))
    {
        force += (orb.pos - me).normalize_or_zero() * ORB_PULL;
    }

    let arena = state.tuning.arena();
    force.x += wall_push(me.x) - wall_push(arena.x - me.x);
    force.y += wall_push(me.y) - wall_push(arena.y - me.y);

    quantise(force)
}

fn wall_push(dist: f32) -> f32 {
    if dist >= WALL_MARGIN {
        0.0
    } else {
        2.0 * (1.0 - dist.max(0.0) / WALL_MARGIN)
    }
}

fn quantise(force: Vec2) -> IVec2 {
    let peak = force.abs().max_element();
    if peak < 1e-3 {
        return IVec2::ZERO;
    }
    let axis = |v: f32| {
        if v.abs() < peak * DEADZONE {
            0
        } else {
            v.signum() as i32
        }
    };
    IVec2::new(axis(force.x), axis(force.y))
}
