//! Axis-aligned box overlap
//!
//! Every entity is a square, so a single inclusive AABB test covers
//! player/enemy and player/orb contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square whose top-left corner is `pos`
    pub fn from_top_left(pos: Vec2, size: f32) -> Self {
        Self::new(pos, pos + Vec2::splat(size))
    }

    /// Square centred on `center`
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size * 0.5);
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Inclusive overlap: boxes that share an edge or corner collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Grow on every side by `amount`
    pub fn inflate(&self, amount: f32) -> Self {
        let d = Vec2::splat(amount);
        Self::new(self.min - d, self.max + d)
    }
}
