//! Screen shake
//!
//! A shake has a peak magnitude that falls linearly to zero over its window.
//! Each update picks a fresh random offset bounded by the current magnitude.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Shake applied when a ball is missed
pub const MISS_SHAKE_MAGNITUDE: f32 = 1.0;
pub const MISS_SHAKE_DURATION: f32 = 0.2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenShake {
    peak: f32,
    duration: f32,
    remaining: f32,
    offset: Vec2,
}

impl ScreenShake {
    /// Start (or restart) a shake window
    pub fn trigger(&mut self, magnitude: f32, duration: f32) {
        if !(magnitude > 0.0) || !(duration > 0.0) {
            return;
        }
        self.peak = magnitude;
        self.duration = duration;
        self.remaining = duration;
    }

    /// Magnitude right now; zero outside an active window
    pub fn magnitude(&self) -> f32 {
        if self.remaining <= 0.0 || self.duration <= 0.0 {
            0.0
        } else {
            self.peak * (self.remaining / self.duration)
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Offset a renderer should translate the scene by this frame
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Advance the window and roll a new offset
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) {
        self.remaining = (self.remaining - dt).max(0.0);
        let mag = self.magnitude();
        self.offset = if mag > 0.0 {
            Vec2::new(rng.random_range(-mag..=mag), rng.random_range(-mag..=mag))
        } else {
            Vec2::ZERO
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
