//! Simulation step
//!
//! Advances the game by one frame's elapsed time. Order within a tick is fixed:
//! paddle → spawn → integrate/collide → cull → combo decay → game-over check.
//! Because catches are resolved before the cull, a caught ball can never also
//! be counted as missed.

use super::collision::{ball_below_arena, ball_paddle_overlap};
use super::spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::clamp_dt;

/// Normalized input for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Absolute horizontal target for the paddle centre (mouse/touch)
    pub target_x: Option<f32>,
    /// Held left (keyboard)
    pub left: bool,
    /// Held right (keyboard)
    pub right: bool,
}

/// Advance the game state by `dt` seconds, with `now` the simulation clock
/// after this frame.
///
/// Does nothing unless the game is Running. `dt` is clamped to
/// `[0, tuning.max_dt]`.
///
/// Events are appended to `state.events` and never cleared here; callers
/// stepping the state directly must drain them with
/// [`GameState::drain_events`] or the queue grows for the whole session.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, now: f64) {
    if state.phase != GamePhase::Running {
        return;
    }

    let dt = clamp_dt(dt, state.tuning.max_dt);
    state.time = now;

    move_paddle(state, input, dt);
    spawner::spawn(state, now);
    resolve_catches(state, dt);
    cull_balls(state);
    decay_combo(state, dt);

    if state.stats.lives == 0 {
        state.phase = GamePhase::Ended;
        state.events.push(GameEvent::GameOver {
            final_score: state.stats.score,
        });
        log::info!("Game over - final score {}", state.stats.score);
    }
}

/// Absolute target wins over held keys; the paddle always stays in bounds
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let paddle = &mut state.paddle;
    match input.target_x {
        Some(target) if target.is_finite() => {
            paddle.x = target - paddle.width / 2.0;
        }
        _ => {
            if input.left != input.right {
                let dir = if input.right { 1.0 } else { -1.0 };
                paddle.x += dir * state.tuning.paddle_speed * dt;
            }
        }
    }
    paddle.clamp_to(state.tuning.arena_width);
}

/// Integrate live balls and catch the ones touching the paddle
fn resolve_catches(state: &mut GameState, dt: f32) {
    let paddle = &state.paddle;
    let tuning = &state.tuning;
    let stats = &mut state.stats;

    for ball in state.balls.iter_mut().filter(|b| !b.caught) {
        ball.pos.y += ball.vy * dt;

        if !ball_paddle_overlap(ball, paddle) {
            continue;
        }

        ball.caught = true;
        stats.combo_multiplier = (stats.combo_multiplier + 1).min(tuning.combo_max);
        stats.combo_timer = tuning.combo_timeout;
        // Multiplier is applied after the increment: a fresh combo scores x2
        let base = if ball.special { tuning.special_bonus } else { 1 };
        stats.score += base * stats.combo_multiplier as u64;

        let mut pos = ball.pos;
        pos.y = pos.y.max(paddle.y - 2.0);
        state.events.push(GameEvent::Caught {
            id: ball.id,
            pos,
            color: ball.color,
            special: ball.special,
        });
    }
}

/// Drop caught balls; charge a life for each ball that left the arena
fn cull_balls(state: &mut GameState) {
    let arena_height = state.tuning.arena_height;
    let stats = &mut state.stats;
    let events = &mut state.events;

    state.balls.retain(|ball| {
        if ball.caught {
            return false;
        }
        if ball_below_arena(ball, arena_height) {
            stats.lives = stats.lives.saturating_sub(1);
            stats.break_combo();
            events.push(GameEvent::Missed { id: ball.id });
            log::debug!("Missed ball {} ({} lives left)", ball.id, stats.lives);
            return false;
        }
        true
    });
}

fn decay_combo(state: &mut GameState, dt: f32) {
    let stats = &mut state.stats;
    if stats.combo_multiplier <= 1 {
        return;
    }
    stats.combo_timer -= dt;
    if stats.combo_timer <= 0.0 {
        stats.break_combo();
        state.events.push(GameEvent::ComboExpired);
    }
}
