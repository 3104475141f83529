//! Visual and audio feedback derived from simulation events
//!
//! Owns particles, screen shake and the starfield. Reads events and settings;
//! never writes back into the simulation. It runs on its own RNG stream so
//! toggling effects cannot change what spawns.

pub mod particles;
pub mod shake;
pub mod starfield;

pub use particles::{MAX_PARTICLES, Particle};
pub use shake::ScreenShake;
pub use starfield::{Star, Starfield};

use rand_pcg::Pcg32;

use crate::audio::SoundCue;
use crate::settings::Settings;
use crate::sim::GameEvent;
use crate::tuning::Tuning;

/// PCG stream id for feedback randomness
const FEEDBACK_STREAM: u64 = 0xfeed_ba11;

#[derive(Debug, Clone)]
pub struct Feedback {
    rng: Pcg32,
    pub particles: Vec<Particle>,
    pub shake: ScreenShake,
    pub starfield: Starfield,
}

impl Feedback {
    /// Effects for an arena described by `tuning`. Invalid arena sizes fall
    /// back to the repaired values [`Tuning::sanitized`] produces.
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let tuning = tuning.clone().sanitized();
        let mut rng = Pcg32::new(seed, FEEDBACK_STREAM);
        let starfield = Starfield::new(&mut rng, tuning.arena_width, tuning.arena_height);
        Self {
            rng,
            particles: Vec::new(),
            shake: ScreenShake::default(),
            starfield,
        }
    }

    /// Drop transient effects (new session). The starfield keeps drifting.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.shake.clear();
    }

    /// React to one simulation event. Returns the sound cue to play, if any.
    pub fn handle_event(&mut self, event: &GameEvent, settings: &Settings) -> Option<SoundCue> {
        match event {
            GameEvent::Caught {
                pos,
                color,
                special,
                ..
            } => {
                if settings.particles {
                    particles::spawn_burst(&mut self.particles, &mut self.rng, *pos, *color);
                }
                Some(if *special {
                    SoundCue::SpecialCatch
                } else {
                    SoundCue::Catch
                })
            }
            GameEvent::Missed { .. } => {
                if settings.effective_screen_shake() {
                    self.shake
                        .trigger(shake::MISS_SHAKE_MAGNITUDE, shake::MISS_SHAKE_DURATION);
                }
                None
            }
            GameEvent::ComboExpired => None,
            GameEvent::GameOver { .. } => Some(SoundCue::GameOver),
        }
    }

    /// Per-frame update of all effects
    pub fn update(&mut self, dt: f32, settings: &Settings) {
        if settings.particles {
            particles::update_particles(&mut self.particles, dt);
        } else {
            self.particles.clear();
        }

        if settings.effective_screen_shake() {
            self.shake.update(dt, &mut self.rng);
        } else {
            self.shake.clear();
        }

        if settings.starfield {
            self.starfield.update(dt, &mut self.rng);
        }
    }
}
