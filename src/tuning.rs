//! Data-driven game balance
//!
//! Defaults reproduce the classic feel. Distances are pixels, speeds are
//! pixels per normalized frame, intervals are whole frame ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,

    // === Enemies ===
    pub enemy_size: f32,
    /// Frame ticks between enemy spawns
    pub enemy_spawn_every: u32,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    /// Velocity gained toward the player per normalized frame
    pub enemy_accel: f32,
    /// Extra max speed per elapsed frame at spawn time
    pub enemy_speed_ramp: f32,

    // === Orbs ===
    pub orb_size: f32,
    /// Frame ticks between orb spawn attempts
    pub orb_spawn_every: u32,
    /// Orbs never spawn closer than this to an arena edge
    pub orb_inset: f32,
    pub max_orbs: usize,

    // === Slow motion ===
    /// Multiplier on enemy translation and score while slowed
    pub slow_factor: f32,
    /// Frames of slow motion granted by an orb
    pub slow_time: u32,

    // === Score ===
    pub score_per_frame: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 900.0,
            arena_height: 600.0,

            player_size: 20.0,
            player_speed: 4.2,

            enemy_size: 18.0,
            enemy_spawn_every: 60,
            enemy_speed_min: 1.2,
            enemy_speed_max: 2.8,
            enemy_accel: 0.0009,
            enemy_speed_ramp: 0.0007,

            orb_size: 10.0,
            orb_spawn_every: 240,
            orb_inset: 40.0,
            max_orbs: 2,

            slow_factor: 0.35,
            slow_time: 120,

            score_per_frame: 0.1,
        }
    }
}

impl Tuning {
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    pub fn arena_center(&self) -> Vec2 {
        self.arena() * 0.5
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let floats = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_size", self.player_size),
            ("player_speed", self.player_speed),
            ("enemy_size", self.enemy_size),
            ("enemy_speed_min", self.enemy_speed_min),
            ("enemy_speed_max", self.enemy_speed_max),
            ("enemy_accel", self.enemy_accel),
            ("enemy_speed_ramp", self.enemy_speed_ramp),
            ("orb_size", self.orb_size),
            ("orb_inset", self.orb_inset),
            ("slow_factor", self.slow_factor),
        ];
        for (name, v) in floats {
            if !v.is_finite() {
                return Err(SettingsError::Invalid(format!("{name} must be finite, got {v}")));
            }
        }
        if !self.score_per_frame.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "score_per_frame must be finite, got {}",
                self.score_per_frame
            )));
        }

        fn positive(name: &str, v: f32) -> Result<(), SettingsError> {
            if v > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::Invalid(format!("{name} must be positive, got {v}")))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        positive("player_size", self.player_size)?;
        positive("player_speed", self.player_speed)?;
        positive("enemy_size", self.enemy_size)?;
        positive("enemy_speed_min", self.enemy_speed_min)?;
        positive("orb_size", self.orb_size)?;

        if self.player_size > self.arena_width.min(self.arena_height) {
            return Err(SettingsError::Invalid(
                "player does not fit inside the arena".into(),
            ));
        }
        if self.enemy_speed_max < self.enemy_speed_min {
            return Err(SettingsError::Invalid(format!(
                "enemy speed range is inverted: [{}, {}]",
                self.enemy_speed_min, self.enemy_speed_max
            )));
        }
        if self.enemy_accel < 0.0 || self.enemy_speed_ramp < 0.0 {
            return Err(SettingsError::Invalid(
                "enemy acceleration and speed ramp can't be negative".into(),
            ));
        }
        if self.enemy_spawn_every == 0 || self.orb_spawn_every == 0 {
            return Err(SettingsError::Invalid("spawn intervals must be at least 1".into()));
        }
        if self.orb_inset < 0.0
            || self.orb_inset * 2.0 > self.arena_width
            || self.orb_inset * 2.0 > self.arena_height
        {
            return Err(SettingsError::Invalid(format!(
                "orb_inset {} leaves no room to spawn orbs",
                self.orb_inset
            )));
        }
        if !(self.slow_factor > 0.0 && self.slow_factor <= 1.0) {
            return Err(SettingsError::Invalid(format!(
                "slow_factor must be in (0, 1], got {}",
                self.slow_factor
            )));
        }
        if !(self.score_per_frame >= 0.0) {
            return Err(SettingsError::Invalid("score_per_frame can't be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Tuning::default().validate().unwrap();
        assert_eq!(Tuning::default().arena_center(), Vec2::new(450.0, 300.0));
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let tuning = Tuning {
            enemy_speed_min: 3.0,
            enemy_speed_max: 1.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn oversized_inset_rejected() {
        let tuning = Tuning {
            orb_inset: 400.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let tuning = Tuning {
            enemy_speed_max: f32::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            enemy_accel: f32::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            score_per_frame: f64::INFINITY,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn slow_factor_bounds() {
        for bad in [0.0, -0.5, 1.5] {
            let tuning = Tuning {
                slow_factor: bad,
                ..Default::default()
            };
            assert!(tuning.validate().is_err(), "slow_factor {bad}");
        }
        let tuning = Tuning {
            slow_factor: 1.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }
}
