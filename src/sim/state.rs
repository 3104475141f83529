//! Game state and core simulation types
//!
//! Everything the simulation step mutates lives in [`GameState`]; there is no
//! module-level state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::SpawnClock;
use crate::settings::Difficulty;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start; overlay shown, nothing steps
    Idle,
    /// Active gameplay
    Running,
    /// Stepping suspended, resumable
    Paused,
    /// Lives exhausted; waits for a restart
    Ended,
}

/// A falling ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (px/s, positive is down)
    pub vy: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Rare high-value variant
    pub special: bool,
    /// Set once the paddle resolves this ball; it is culled the same tick
    pub caught: bool,
}

impl Ball {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// The player's paddle (axis-aligned rectangle, fixed vertical band)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle centred horizontally at its resting height
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.arena_width - tuning.paddle_width) / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Keep the paddle fully inside `[0, arena_width]`
    pub fn clamp_to(&mut self, arena_width: f32) {
        self.x = self.x.clamp(0.0, (arena_width - self.width).max(0.0));
    }
}

/// Score, lives and combo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u64,
    pub lives: u32,
    /// Always within `[1, combo_max]`
    pub combo_multiplier: u32,
    /// Seconds left before the multiplier falls back to 1
    pub combo_timer: f32,
}

impl SessionStats {
    pub fn new(max_lives: u32) -> Self {
        Self {
            score: 0,
            lives: max_lives,
            combo_multiplier: 1,
            combo_timer: 0.0,
        }
    }

    /// Drop the combo back to its resting value
    pub fn break_combo(&mut self) {
        self.combo_multiplier = 1;
        self.combo_timer = 0.0;
    }
}

/// Simulation events, drained by feedback/audio/UI after each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Paddle caught a ball; `pos` is where the burst should appear
    Caught {
        id: u32,
        pos: Vec2,
        color: u32,
        special: bool,
    },
    /// A ball fell out of the arena uncaught
    Missed { id: u32 },
    /// Combo timer ran out
    ComboExpired,
    GameOver { final_score: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG (spawn placement only)
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Applied to the next spawn only
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    /// Simulation clock (seconds of Running time since start)
    pub time: f64,
    pub paddle: Paddle,
    /// Live balls, in spawn order
    pub balls: Vec<Ball>,
    pub stats: SessionStats,
    pub clock: SpawnClock,
    /// Events not yet drained by a consumer
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            difficulty: Difficulty::default(),
            phase: GamePhase::Idle,
            time: 0.0,
            paddle: Paddle::centered(&tuning),
            balls: Vec::new(),
            stats: SessionStats::new(tuning.max_lives),
            clock: SpawnClock::new(&tuning),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restore pools, stats and clocks to their initial values.
    ///
    /// The RNG keeps its stream so consecutive sessions differ; difficulty and
    /// tuning are configuration and survive.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paddle = Paddle::centered(&self.tuning);
        self.balls.clear();
        self.stats = SessionStats::new(self.tuning.max_lives);
        self.clock = SpawnClock::new(&self.tuning);
        self.events.clear();
        self.next_id = 1;
    }

    /// Take this tick's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
