//! Sound cues and the audio sink interface
//!
//! The simulation never talks to an audio device. It hands cues to an
//! [`AudioSink`]; each cue also describes itself as a list of oscillator
//! recipes so any backend (Web Audio, cpal, ...) can synthesize it without
//! asset files. Playback is fire-and-forget: a sink that fails must swallow
//! the failure rather than interrupt the frame.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Normal ball caught
    Catch,
    /// Special ball caught - blip plus a meow
    SpecialCatch,
    /// Last life lost
    GameOver,
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicTrack {
    Gameplay,
    Death,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

/// One oscillator voice with an exponential pitch sweep and gain envelope.
///
/// Times are seconds relative to when the cue fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    pub waveform: Waveform,
    pub delay: f32,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Time to reach `end_hz`
    pub sweep: f32,
    /// Peak gain (before volume scaling)
    pub peak_gain: f32,
    /// Time to reach peak gain
    pub attack: f32,
    /// Time the gain has decayed back to silence
    pub release: f32,
    /// Oscillator stop time
    pub stop: f32,
}

const CATCH_BLIP: Tone = Tone {
    waveform: Waveform::Triangle,
    delay: 0.0,
    start_hz: 700.0,
    end_hz: 350.0,
    sweep: 0.08,
    peak_gain: 0.32,
    attack: 0.01,
    release: 0.12,
    stop: 0.13,
};

const MEOW: Tone = Tone {
    waveform: Waveform::Sawtooth,
    delay: 0.0,
    start_hz: 520.0,
    end_hz: 320.0,
    sweep: 0.28,
    peak_gain: 0.28,
    attack: 0.02,
    release: 0.32,
    stop: 0.34,
};

/// Descending four-note sting
const fn game_over_note(index: usize, hz: f32) -> Tone {
    Tone {
        waveform: Waveform::Sine,
        delay: index as f32 * 0.2,
        start_hz: hz,
        end_hz: hz,
        sweep: 0.0,
        peak_gain: 0.3,
        attack: 0.0,
        release: 0.3,
        stop: 0.4,
    }
}

static CATCH: [Tone; 1] = [CATCH_BLIP];
static SPECIAL_CATCH: [Tone; 2] = [CATCH_BLIP, MEOW];
static GAME_OVER: [Tone; 4] = [
    game_over_note(0, 400.0),
    game_over_note(1, 350.0),
    game_over_note(2, 300.0),
    game_over_note(3, 200.0),
];

impl SoundCue {
    /// Oscillator voices that make up this cue
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundCue::Catch => &CATCH,
            SoundCue::SpecialCatch => &SPECIAL_CATCH,
            SoundCue::GameOver => &GAME_OVER,
        }
    }

    /// Total length of the cue in seconds
    pub fn duration(&self) -> f32 {
        self.tones()
            .iter()
            .map(|t| t.delay + t.stop)
            .fold(0.0, f32::max)
    }
}

/// Anything that can play cues.
pub trait AudioSink {
    /// Play a cue at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: SoundCue, volume: f32);

    /// Switch background music; `None` stops it
    fn set_music(&mut self, _track: Option<MusicTrack>, _volume: f32) {}
}

/// Silent sink for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue, _volume: f32) {}
}

/// Sink that only logs what it would play
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        log::debug!(
            "Audio: {:?} at {:.2} ({} voices, {:.2}s)",
            cue,
            volume,
            cue.tones().len(),
            cue.duration()
        );
    }

    fn set_music(&mut self, track: Option<MusicTrack>, volume: f32) {
        match track {
            Some(track) => log::debug!("Music: {:?} at {:.2}", track, volume),
            None => log::debug!("Music stopped"),
        }
    }
}

/// Sink that records everything it receives, for tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingAudio {
    pub cues: std::rc::Rc<std::cell::RefCell<Vec<SoundCue>>>,
    pub music: std::rc::Rc<std::cell::RefCell<Vec<Option<MusicTrack>>>>,
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue, _volume: f32) {
        self.cues.borrow_mut().push(cue);
    }

    fn set_music(&mut self, track: Option<MusicTrack>, _volume: f32) {
        self.music.borrow_mut().push(track);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_catch_layers_meow() {
        assert_eq!(SoundCue::Catch.tones().len(), 1);
        let special = SoundCue::SpecialCatch.tones();
        assert_eq!(special.len(), 2);
        assert_eq!(special[1].waveform, Waveform::Sawtooth);
    }

    #[test]
    fn test_cue_durations() {
        assert!((SoundCue::Catch.duration() - 0.13).abs() < 1e-6);
        assert!((SoundCue::SpecialCatch.duration() - 0.34).abs() < 1e-6);
        assert!((SoundCue::GameOver.duration() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_envelopes_are_ordered() {
        for cue in [SoundCue::Catch, SoundCue::SpecialCatch, SoundCue::GameOver] {
            for tone in cue.tones() {
                assert!(tone.attack <= tone.release);
                assert!(tone.release <= tone.stop);
                assert!(tone.start_hz > 0.0 && tone.end_hz > 0.0);
            }
        }
    }
}
