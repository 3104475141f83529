//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only arrives through `tick(dt, now)`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod session;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ball_below_arena, ball_paddle_overlap};
pub use spawner::{PALETTE, SPECIAL_COLOR, SpawnClock};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, SessionStats};
pub use tick::{TickInput, tick};
