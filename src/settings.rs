//! Player settings and preferences
//!
//! Visual toggles only change what the feedback/render layer does; the
//! difficulty is the one setting the simulation reads (through the spawner).

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Vertical speed band (min, max) in px/s for newly spawned balls
    pub fn speed_range(&self, tuning: &Tuning) -> (f32, f32) {
        let (min, max) = (tuning.base_min_speed, tuning.base_max_speed);
        match self {
            Difficulty::Easy => (min * 0.8, max * 0.8),
            Difficulty::Normal => (min, max),
            Difficulty::Hard => (min * 1.25, max * 1.35),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Visual Effects ===
    /// Parallax starfield behind the playfield
    pub starfield: bool,
    /// Ghost trails behind falling balls
    pub trails: bool,
    /// Catch bursts
    pub particles: bool,
    /// Screen shake on a missed ball
    pub screen_shake: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub music_muted: bool,

    // === Accessibility ===
    /// Reduced motion (disables shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            // Visual effects - all on by default
            starfield: true,
            trails: true,
            particles: true,
            screen_shake: true,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.4,
            music_muted: false,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Volume applied to sound cues
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Volume applied to music, zero when muted
    pub fn effective_music_volume(&self) -> f32 {
        if self.music_muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Parse settings from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.clamp_volumes();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn clamp_volumes(&mut self) {
        for vol in [
            &mut self.master_volume,
            &mut self.sfx_volume,
            &mut self.music_volume,
        ] {
            if !vol.is_finite() {
                log::warn!("Non-finite volume in settings, resetting to 1.0");
                *vol = 1.0;
            }
            *vol = vol.clamp(0.0, 1.0);
        }
    }
}
