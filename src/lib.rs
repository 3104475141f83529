//! Falling Balls - a paddle-and-falling-balls arcade simulation
//!
//! Core modules:
//! - `sim`: Simulation (spawning, collisions, scoring, session phases)
//! - `feedback`: Particles, screen shake and background starfield
//! - `audio`: Sound cues and the sink trait audio backends implement
//! - `snapshot`: Read-only per-frame view for renderers
//! - `settings`: Player preferences
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod feedback;
pub mod game;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use game::Game;
pub use settings::{Difficulty, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Paddle defaults - sits near the bottom edge
    pub const PADDLE_WIDTH: f32 = 148.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    /// Distance from paddle top to the bottom of the arena
    pub const PADDLE_BOTTOM_OFFSET: f32 = 34.0;
    /// Keyboard paddle speed (px/s)
    pub const PADDLE_SPEED: f32 = 420.0;

    /// Ball radius band
    pub const BALL_MIN_RADIUS: f32 = 10.0;
    pub const BALL_MAX_RADIUS: f32 = 16.0;
    /// Fall speed at normal difficulty (px/s)
    pub const BASE_BALL_MIN_SPEED: f32 = 150.0;
    pub const BASE_BALL_MAX_SPEED: f32 = 300.0;

    /// Spawn cadence (seconds)
    pub const SPAWN_INTERVAL_START: f32 = 1.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.44;
    /// Multiplicative decay applied after every normal spawn
    pub const SPAWN_INTERVAL_DECAY: f32 = 0.985;
    pub const SPECIAL_SPAWN_INTERVAL: f32 = 7.0;

    /// Scoring
    pub const SPECIAL_BONUS: u64 = 5;
    pub const MAX_LIVES: u32 = 3;
    pub const COMBO_TIMEOUT: f32 = 2.0;
    pub const COMBO_MAX: u32 = 9;

    /// Largest frame delta the simulation accepts (seconds)
    pub const MAX_DT: f32 = 0.033;
}

/// Clamp a measured frame delta into `[0, max_dt]`.
///
/// Negative and non-finite deltas collapse to zero; huge deltas (tab
/// backgrounding, debugger pauses) are capped.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, max_dt) } else { 0.0 }
}
