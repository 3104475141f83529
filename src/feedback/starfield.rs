//! Background starfield
//!
//! Decoration only. Deeper stars (larger `depth`) fall faster and draw bigger.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub const STAR_COUNT: usize = 120;

const DEPTH_MIN: f32 = 0.5;
const DEPTH_MAX: f32 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub depth: f32,
}

impl Star {
    /// Fall speed (px/s)
    #[inline]
    pub fn speed(&self) -> f32 {
        18.0 + self.depth * 22.0
    }

    /// Square size when drawn
    #[inline]
    pub fn size(&self) -> f32 {
        1.2 + self.depth * 0.6
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl Starfield {
    pub fn new(rng: &mut Pcg32, width: f32, height: f32) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
                depth: rng.random_range(DEPTH_MIN..DEPTH_MAX),
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }

    /// Drift stars downward, wrapping to just above the top edge
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) {
        for star in self.stars.iter_mut() {
            star.pos.y += star.speed() * dt;
            if star.pos.y > self.height {
                star.pos.y = -2.0;
                star.pos.x = rng.random_range(0.0..self.width);
            }
        }
    }
}
