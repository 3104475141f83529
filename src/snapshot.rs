//! Read-only per-frame view of the game for renderers and HUDs
//!
//! Built after the simulation and feedback updates of a frame. Everything a
//! painter needs is resolved here (opacity, trail ghosts, glyph choice) so a
//! renderer never has to reach into simulation state.

use glam::Vec2;
use serde::Serialize;

use crate::feedback::Feedback;
use crate::settings::{Difficulty, Settings};
use crate::sim::{Ball, GamePhase, GameState};

/// Number of ghost circles drawn behind each ball
pub const TRAIL_GHOSTS: usize = 3;
/// Seconds of travel between ghosts
const TRAIL_SPACING: f32 = 0.02;
const TRAIL_SHRINK: f32 = 0.08;
const TRAIL_ALPHA: f32 = 0.15;
/// Balls at or below this radius are drawn as paws
const PAW_MAX_RADIUS: f32 = 12.0;

/// How a ball should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BallGlyph {
    /// Special ball
    CatFace,
    /// Small normal ball
    Paw,
    /// Plain filled circle
    Orb,
}

impl BallGlyph {
    pub fn for_ball(ball: &Ball) -> Self {
        if ball.special {
            BallGlyph::CatFace
        } else if ball.radius <= PAW_MAX_RADIUS {
            BallGlyph::Paw
        } else {
            BallGlyph::Orb
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailGhost {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    pub special: bool,
    pub glyph: BallGlyph,
    /// Empty when trails are off
    pub trail: Vec<TrailGhost>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: u32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarView {
    pub pos: Vec2,
    pub size: f32,
}

/// HUD values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub combo_multiplier: u32,
    pub combo_timer: f32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub arena: Vec2,
    pub paddle: Rect,
    pub balls: Vec<BallView>,
    pub particles: Vec<ParticleView>,
    /// Empty when the starfield is off
    pub stars: Vec<StarView>,
    /// Translate the whole scene by this
    pub shake_offset: Vec2,
    pub hud: Hud,
}

fn trail_for(ball: &Ball) -> Vec<TrailGhost> {
    (1..=TRAIL_GHOSTS)
        .map(|t| {
            let t = t as f32;
            TrailGhost {
                pos: Vec2::new(ball.pos.x, ball.pos.y - ball.vy * TRAIL_SPACING * t),
                radius: ball.radius * (1.0 - t * TRAIL_SHRINK),
                alpha: TRAIL_ALPHA,
            }
        })
        .collect()
}

impl Snapshot {
    pub fn capture(state: &GameState, feedback: &Feedback, settings: &Settings) -> Self {
        let balls = state
            .balls
            .iter()
            .filter(|b| !b.caught)
            .map(|ball| BallView {
                id: ball.id,
                pos: ball.pos,
                radius: ball.radius,
                color: ball.color,
                special: ball.special,
                glyph: BallGlyph::for_ball(ball),
                trail: if settings.trails {
                    trail_for(ball)
                } else {
                    Vec::new()
                },
            })
            .collect();

        let particles = if settings.particles {
            feedback
                .particles
                .iter()
                .map(|p| {
                    let opacity = p.opacity();
                    ParticleView {
                        pos: p.pos,
                        radius: 2.0 + 2.0 * opacity,
                        color: p.color,
                        opacity,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let stars = if settings.starfield {
            feedback
                .starfield
                .stars
                .iter()
                .map(|s| StarView {
                    pos: s.pos,
                    size: s.size(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let shake_offset = if settings.effective_screen_shake() {
            feedback.shake.offset()
        } else {
            Vec2::ZERO
        };

        Self {
            phase: state.phase,
            arena: Vec2::new(state.tuning.arena_width, state.tuning.arena_height),
            paddle: Rect {
                x: state.paddle.x,
                y: state.paddle.y,
                width: state.paddle.width,
                height: state.paddle.height,
            },
            balls,
            particles,
            stars,
            shake_offset,
            hud: Hud {
                score: state.stats.score,
                lives: state.stats.lives,
                combo_multiplier: state.stats.combo_multiplier,
                combo_timer: state.stats.combo_timer,
                difficulty: state.difficulty,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn ball(radius: f32, special: bool) -> Ball {
        Ball {
            id: 1,
            pos: Vec2::new(100.0, 200.0),
            radius,
            vy: 250.0,
            color: 0xfde68a,
            special,
            caught: false,
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(BallGlyph::for_ball(&ball(20.0, true)), BallGlyph::CatFace);
        assert_eq!(BallGlyph::for_ball(&ball(12.0, false)), BallGlyph::Paw);
        assert_eq!(BallGlyph::for_ball(&ball(14.0, false)), BallGlyph::Orb);
    }

    #[test]
    fn test_trail_ghosts() {
        let trail = trail_for(&ball(10.0, false));
        assert_eq!(trail.len(), TRAIL_GHOSTS);
        assert!((trail[0].pos.y - (200.0 - 250.0 * 0.02)).abs() < 1e-4);
        assert!((trail[2].radius - 10.0 * (1.0 - 0.24)).abs() < 1e-4);
    }

    #[test]
    fn test_capture_respects_toggles() {
        let mut state = GameState::new(1);
        state.balls.push(ball(14.0, false));
        let mut fx = Feedback::new(1, &Tuning::default());
        fx.handle_event(
            &crate::sim::GameEvent::Caught {
                id: 9,
                pos: Vec2::new(10.0, 10.0),
                color: 0,
                special: false,
            },
            &Settings::default(),
        );

        let full = Snapshot::capture(&state, &fx, &Settings::default());
        assert_eq!(full.balls.len(), 1);
        assert_eq!(full.balls[0].trail.len(), TRAIL_GHOSTS);
        assert!(!full.particles.is_empty());
        assert!(!full.stars.is_empty());
        assert_eq!(full.hud.lives, state.stats.lives);

        let bare = Settings {
            trails: false,
            particles: false,
            starfield: false,
            ..Default::default()
        };
        let plain = Snapshot::capture(&state, &fx, &bare);
        assert!(plain.balls[0].trail.is_empty());
        assert!(plain.particles.is_empty());
        assert!(plain.stars.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(1);
        let fx = Feedback::new(1, &state.tuning);
        let json = Snapshot::capture(&state, &fx, &Settings::default())
            .to_json()
            .unwrap();
        assert!(json.contains("\"phase\": \"Idle\""));
        assert!(json.contains("\"difficulty\": \"normal\""));
    }
}
