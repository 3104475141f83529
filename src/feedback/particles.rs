//! Catch bursts
//!
//! Particles are purely cosmetic and never influence gameplay.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Particles emitted per catch
pub const BURST_COUNT: usize = 24;
/// Hard cap on live particles; the oldest are evicted first
pub const MAX_PARTICLES: usize = 512;
/// Light downward pull (px/s²)
pub const PARTICLE_GRAVITY: f32 = 600.0 * 0.2;

const BURST_SPEED_MIN: f32 = 80.0;
const BURST_SPEED_MAX: f32 = 260.0;
const LIFE_MIN: f32 = 0.35;
const LIFE_MAX: f32 = 0.6;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left
    pub life: f32,
    pub max_life: f32,
    pub color: u32,
}

impl Particle {
    /// Render opacity, derived from remaining life
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Spray a radial burst of particles from `pos`
pub fn spawn_burst(particles: &mut Vec<Particle>, rng: &mut Pcg32, pos: Vec2, color: u32) {
    let overflow = (particles.len() + BURST_COUNT).saturating_sub(MAX_PARTICLES);
    if overflow > 0 {
        particles.drain(..overflow.min(particles.len()));
    }

    for _ in 0..BURST_COUNT {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
        particles.push(Particle {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            life: rng.random_range(LIFE_MIN..LIFE_MAX),
            max_life: LIFE_MAX,
            color,
        });
    }
}

/// Integrate, age and purge particles
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
        particle.life -= dt;
    }
    particles.retain(|p| p.life > 0.0);
}
