//! Falling Balls headless runner
//!
//! Plays a session at a fixed 60 Hz with a simple autopilot and prints the
//! final snapshot as JSON. Useful for smoke-testing balance changes.
//!
//! Usage: `falling-balls [seed] [seconds] [difficulty]`

use std::time::{SystemTime, UNIX_EPOCH};

use falling_balls::audio::LogAudio;
use falling_balls::sim::{GameEvent, GamePhase, GameState, TickInput};
use falling_balls::{Difficulty, Game, Settings, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 60.0;

/// Follow the lowest live ball, drift back to centre when the field is empty
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .balls
        .iter()
        .filter(|b| !b.caught)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|b| b.pos.x)
        .unwrap_or(state.tuning.arena_width / 2.0);
    TickInput {
        target_x: Some(target),
        ..Default::default()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_SECONDS);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();

    log::info!(
        "Falling Balls (headless) seed={} seconds={} difficulty={}",
        seed,
        seconds,
        difficulty.as_str()
    );

    let settings = Settings {
        difficulty,
        ..Default::default()
    };
    let mut game = Game::with_audio(seed, settings, Tuning::default(), Box::new(LogAudio));
    game.start();

    let frames = (seconds / FRAME_DT).ceil() as u64;
    for frame in 0..frames {
        let input = autopilot(&game.state);
        for event in game.frame(FRAME_DT, &input) {
            match event {
                GameEvent::Caught { id, special, .. } => {
                    log::debug!("Frame {}: caught ball {} (special={})", frame, id, special)
                }
                GameEvent::Missed { id } => {
                    log::info!("Frame {}: missed ball {}", frame, id)
                }
                GameEvent::ComboExpired => log::debug!("Frame {}: combo expired", frame),
                GameEvent::GameOver { final_score } => {
                    log::info!("Frame {}: game over, score {}", frame, final_score)
                }
            }
        }
        if game.phase() == GamePhase::Ended {
            break;
        }
    }

    match game.snapshot().to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {:?}", e),
    }
}
