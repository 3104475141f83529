//! Game balance values
//!
//! Everything that shapes how a session plays lives here so it can be tweaked
//! from a JSON file without recompiling. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Upper bounds that keep every derived spawn band finite
const MAX_ARENA_SIDE: f32 = 8192.0;
const MAX_BALL_RADIUS: f32 = 256.0;
const MAX_FALL_SPEED: f32 = 5000.0;

/// Balance parameters for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between paddle top and arena bottom
    pub paddle_bottom_offset: f32,
    pub paddle_speed: f32,

    pub ball_min_radius: f32,
    pub ball_max_radius: f32,
    /// Fall speed band at normal difficulty
    pub base_min_speed: f32,
    pub base_max_speed: f32,

    /// Seconds between normal spawns at session start
    pub spawn_interval_start: f32,
    /// Floor the spawn interval decays toward
    pub spawn_interval_min: f32,
    pub spawn_interval_decay: f32,
    pub special_spawn_interval: f32,

    /// Base score of a special ball (normal balls are worth 1)
    pub special_bonus: u64,
    pub max_lives: u32,
    pub combo_timeout: f32,
    /// Multiplier ceiling
    pub combo_max: u32,

    pub max_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_speed: PADDLE_SPEED,

            ball_min_radius: BALL_MIN_RADIUS,
            ball_max_radius: BALL_MAX_RADIUS,
            base_min_speed: BASE_BALL_MIN_SPEED,
            base_max_speed: BASE_BALL_MAX_SPEED,

            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_decay: SPAWN_INTERVAL_DECAY,
            special_spawn_interval: SPECIAL_SPAWN_INTERVAL,

            special_bonus: SPECIAL_BONUS,
            max_lives: MAX_LIVES,
            combo_timeout: COMBO_TIMEOUT,
            combo_max: COMBO_MAX,

            max_dt: MAX_DT,
        }
    }
}

impl Tuning {
    /// Top edge of the paddle band
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_bottom_offset
    }

    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Repair values that would break simulation invariants.
    ///
    /// Each repair is logged; the result is always safe to simulate with.
    pub fn sanitized(mut self) -> Self {
        let defaults = Tuning::default();

        if !(self.arena_width > 0.0) || !(self.arena_height > 0.0) {
            log::warn!(
                "Invalid arena {}x{}, using defaults",
                self.arena_width,
                self.arena_height
            );
            self.arena_width = defaults.arena_width;
            self.arena_height = defaults.arena_height;
        }
        if self.arena_width > MAX_ARENA_SIDE || self.arena_height > MAX_ARENA_SIDE {
            log::warn!(
                "Arena {}x{} too large, clamping to {}",
                self.arena_width,
                self.arena_height,
                MAX_ARENA_SIDE
            );
            self.arena_width = self.arena_width.min(MAX_ARENA_SIDE);
            self.arena_height = self.arena_height.min(MAX_ARENA_SIDE);
        }

        if !(self.paddle_width > 0.0) || self.paddle_width > self.arena_width {
            log::warn!("Invalid paddle width {}, clamping", self.paddle_width);
            self.paddle_width = defaults.paddle_width.min(self.arena_width);
        }
        if !(self.paddle_height > 0.0) {
            self.paddle_height = defaults.paddle_height;
        }
        if !(self.paddle_bottom_offset >= 0.0) || self.paddle_bottom_offset > self.arena_height {
            log::warn!(
                "Paddle offset {} outside arena, using default",
                self.paddle_bottom_offset
            );
            self.paddle_bottom_offset = defaults.paddle_bottom_offset.min(self.arena_height);
        }

        if self.ball_min_radius > self.ball_max_radius {
            log::warn!(
                "Ball radius bounds swapped ({} > {})",
                self.ball_min_radius,
                self.ball_max_radius
            );
            std::mem::swap(&mut self.ball_min_radius, &mut self.ball_max_radius);
        }
        if !(self.ball_max_radius <= MAX_BALL_RADIUS) {
            log::warn!(
                "Ball radius {} too large, clamping to {}",
                self.ball_max_radius,
                MAX_BALL_RADIUS
            );
            self.ball_max_radius = MAX_BALL_RADIUS;
            self.ball_min_radius = self.ball_min_radius.min(MAX_BALL_RADIUS);
        }
        if !(self.ball_min_radius > 0.0) {
            self.ball_min_radius = defaults.ball_min_radius;
            self.ball_max_radius = self.ball_max_radius.max(self.ball_min_radius);
        }
        // Specials need room for their widest radius plus margin on both sides
        let widest = self.ball_max_radius + 6.0;
        if self.arena_width <= 2.0 * (widest + 6.0) {
            log::warn!("Arena too narrow for ball radius {}, using defaults", widest);
            self.ball_min_radius = defaults.ball_min_radius;
            self.ball_max_radius = defaults.ball_max_radius;
        }

        if !(self.base_min_speed > 0.0) || !(self.base_max_speed > 0.0) {
            log::warn!(
                "Non-positive fall speeds {}..{}, using defaults",
                self.base_min_speed,
                self.base_max_speed
            );
            self.base_min_speed = defaults.base_min_speed;
            self.base_max_speed = defaults.base_max_speed;
        }
        if self.base_min_speed > MAX_FALL_SPEED || self.base_max_speed > MAX_FALL_SPEED {
            log::warn!(
                "Fall speeds {}..{} too fast, clamping to {}",
                self.base_min_speed,
                self.base_max_speed,
                MAX_FALL_SPEED
            );
            self.base_min_speed = self.base_min_speed.min(MAX_FALL_SPEED);
            self.base_max_speed = self.base_max_speed.min(MAX_FALL_SPEED);
        }
        if self.base_min_speed > self.base_max_speed {
            std::mem::swap(&mut self.base_min_speed, &mut self.base_max_speed);
        }

        if !(self.spawn_interval_min > 0.0) {
            self.spawn_interval_min = defaults.spawn_interval_min;
        }
        if self.spawn_interval_start < self.spawn_interval_min {
            log::warn!(
                "Spawn interval start {} below floor {}, raising",
                self.spawn_interval_start,
                self.spawn_interval_min
            );
            self.spawn_interval_start = self.spawn_interval_min;
        }
        if !(self.spawn_interval_decay > 0.0 && self.spawn_interval_decay <= 1.0) {
            log::warn!("Spawn decay {} outside (0, 1]", self.spawn_interval_decay);
            self.spawn_interval_decay = defaults.spawn_interval_decay;
        }
        if !(self.special_spawn_interval > 0.0) {
            self.special_spawn_interval = defaults.special_spawn_interval;
        }

        if self.max_lives == 0 {
            log::warn!("max_lives must be at least 1");
            self.max_lives = 1;
        }
        if self.combo_max == 0 {
            log::warn!("combo_max must be at least 1");
            self.combo_max = 1;
        }
        if !(self.combo_timeout >= 0.0) {
            self.combo_timeout = defaults.combo_timeout;
        }
        if !(self.max_dt > 0.0) {
            self.max_dt = defaults.max_dt;
        }

        self
    }
}
