//! Time-gated ball spawning
//!
//! Normal balls arrive on an interval that shrinks geometrically toward a
//! floor; special balls arrive on a fixed, independent timer.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Ball, GameState};
use crate::tuning::Tuning;

/// Pastel palette for normal balls (pink, baby blue, soft yellow, lavender, mint)
pub const PALETTE: [u32; 5] = [0xf9a8d4, 0xbfdbfe, 0xfde68a, 0xc4b5fd, 0xa7f3d0];
/// Gold, reserved for special balls
pub const SPECIAL_COLOR: u32 = 0xfbbf24;

/// Horizontal clearance kept between a spawned ball and the arena walls
const NORMAL_MARGIN: f32 = 4.0;
const SPECIAL_MARGIN: f32 = 6.0;
/// Special radius band, relative to the normal maximum
const SPECIAL_RADIUS_MIN_EXTRA: f32 = 2.0;
const SPECIAL_RADIUS_MAX_EXTRA: f32 = 6.0;
/// Special speed band, relative to the active difficulty band
const SPECIAL_SPEED_MIN_SCALE: f32 = 1.05;
const SPECIAL_SPEED_MAX_SCALE: f32 = 1.15;

/// Spawn timing state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnClock {
    /// Sim time of the last normal spawn
    pub last_spawn: f64,
    /// Seconds required between normal spawns; never below the floor
    pub interval: f32,
    pub last_special_spawn: f64,
}

impl SpawnClock {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            last_spawn: 0.0,
            interval: tuning.spawn_interval_start,
            last_special_spawn: 0.0,
        }
    }

    pub fn normal_due(&self, now: f64) -> bool {
        now - self.last_spawn >= self.interval as f64
    }

    pub fn special_due(&self, now: f64, special_interval: f32) -> bool {
        now - self.last_special_spawn >= special_interval as f64
    }

    /// Shrink the interval after a normal spawn
    fn decay(&mut self, tuning: &Tuning) {
        self.interval = (self.interval * tuning.spawn_interval_decay).max(tuning.spawn_interval_min);
    }
}

/// Uniform sample in `[lo, hi)`, collapsing to `lo` for an empty or unbounded band
#[inline]
fn uniform(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo && (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Run both spawn gates for this tick
pub fn spawn(state: &mut GameState, now: f64) {
    spawn_normal(state, now);
    spawn_special(state, now);
}

/// Emit one normal ball if its gate is open. Returns the new ball's id.
pub fn spawn_normal(state: &mut GameState, now: f64) -> Option<u32> {
    if !state.clock.normal_due(now) {
        return None;
    }
    state.clock.last_spawn = now;

    let tuning = &state.tuning;
    let rng = &mut state.rng;
    let (min_speed, max_speed) = state.difficulty.speed_range(tuning);

    let radius = uniform(rng, tuning.ball_min_radius, tuning.ball_max_radius);
    let x = uniform(
        rng,
        radius + NORMAL_MARGIN,
        tuning.arena_width - radius - NORMAL_MARGIN,
    );
    let color = PALETTE[rng.random_range(0..PALETTE.len())];
    let vy = uniform(rng, min_speed, max_speed);

    state.clock.decay(tuning);

    let id = state.next_entity_id();
    state.balls.push(Ball {
        id,
        pos: Vec2::new(x, -radius),
        radius,
        vy,
        color,
        special: false,
        caught: false,
    });
    log::debug!(
        "Spawned ball {} at x={:.1} vy={:.1} (next interval {:.3}s)",
        id,
        x,
        vy,
        state.clock.interval
    );
    Some(id)
}

/// Emit one special ball if its fixed timer has elapsed. Returns the new ball's id.
pub fn spawn_special(state: &mut GameState, now: f64) -> Option<u32> {
    if !state.clock.special_due(now, state.tuning.special_spawn_interval) {
        return None;
    }
    state.clock.last_special_spawn = now;

    let tuning = &state.tuning;
    let rng = &mut state.rng;
    let (min_speed, max_speed) = state.difficulty.speed_range(tuning);

    let radius = uniform(
        rng,
        tuning.ball_max_radius + SPECIAL_RADIUS_MIN_EXTRA,
        tuning.ball_max_radius + SPECIAL_RADIUS_MAX_EXTRA,
    );
    let x = uniform(
        rng,
        radius + SPECIAL_MARGIN,
        tuning.arena_width - radius - SPECIAL_MARGIN,
    );
    let vy = uniform(
        rng,
        min_speed * SPECIAL_SPEED_MIN_SCALE,
        max_speed * SPECIAL_SPEED_MAX_SCALE,
    );

    let id = state.next_entity_id();
    state.balls.push(Ball {
        id,
        pos: Vec2::new(x, -radius),
        radius,
        vy,
        color: SPECIAL_COLOR,
        special: true,
        caught: false,
    });
    log::debug!("Spawned special ball {} at x={:.1} vy={:.1}", id, x, vy);
    Some(id)
}
