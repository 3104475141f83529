//! Frame driver
//!
//! Ties the simulation, feedback and audio together behind the calls a
//! platform layer makes: start/pause/resume from UI, `frame` once per display
//! refresh, `snapshot` for drawing.

use crate::audio::{AudioSink, MusicTrack, NullAudio};
use crate::clamp_dt;
use crate::feedback::Feedback;
use crate::settings::{Difficulty, Settings};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub feedback: Feedback,
    settings: Settings,
    audio: Box<dyn AudioSink>,
}

impl Game {
    /// Silent game with default tuning
    pub fn new(seed: u64, settings: Settings) -> Self {
        Self::with_audio(seed, settings, Tuning::default(), Box::new(NullAudio))
    }

    pub fn with_audio(
        seed: u64,
        settings: Settings,
        tuning: Tuning,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let mut state = GameState::with_tuning(seed, tuning);
        state.set_difficulty(settings.difficulty);
        let feedback = Feedback::new(seed, &state.tuning);
        Self {
            state,
            feedback,
            settings,
            audio,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace settings. Difficulty applies from the next spawn.
    pub fn set_settings(&mut self, settings: Settings) {
        self.state.set_difficulty(settings.difficulty);
        let music_changed =
            settings.effective_music_volume() != self.settings.effective_music_volume();
        self.settings = settings;
        if music_changed && self.state.is_running() {
            self.play_music(Some(MusicTrack::Gameplay));
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.state.set_difficulty(difficulty);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Start (or restart) a session
    pub fn start(&mut self) -> bool {
        if !self.state.start() {
            return false;
        }
        self.feedback.reset();
        self.play_music(Some(MusicTrack::Gameplay));
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.state.pause() {
            return false;
        }
        self.play_music(None);
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.state.resume() {
            return false;
        }
        self.play_music(Some(MusicTrack::Gameplay));
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Advance one display frame by the measured wall time `dt`.
    ///
    /// Does nothing unless Running. Returns the events this frame produced.
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> Vec<GameEvent> {
        if !self.state.is_running() {
            return Vec::new();
        }

        let dt = clamp_dt(dt, self.state.tuning.max_dt);
        let now = self.state.time + dt as f64;
        tick(&mut self.state, input, dt, now);

        let events = self.state.drain_events();
        let volume = self.settings.effective_sfx_volume();
        for event in &events {
            if let Some(cue) = self.feedback.handle_event(event, &self.settings) {
                if volume > 0.0 {
                    self.audio.play(cue, volume);
                }
            }
            if let GameEvent::GameOver { final_score } = event {
                log::info!("Session ended with score {}", final_score);
                self.play_music(Some(MusicTrack::Death));
            }
        }

        self.feedback.update(dt, &self.settings);
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.feedback, &self.settings)
    }

    fn play_music(&mut self, track: Option<MusicTrack>) {
        let volume = self.settings.effective_music_volume();
        match track {
            Some(track) if volume > 0.0 => self.audio.set_music(Some(track), volume),
            _ => self.audio.set_music(None, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, SoundCue};
    use crate::sim::Ball;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn recording_game() -> (Game, RecordingAudio) {
        let audio = RecordingAudio::default();
        let game = Game::with_audio(
            7,
            Settings::default(),
            Tuning::default(),
            Box::new(audio.clone()),
        );
        (game, audio)
    }

    fn drop_on_paddle(game: &mut Game, special: bool) {
        let id = game.state.next_entity_id();
        let paddle = &game.state.paddle;
        let ball = Ball {
            id,
            pos: Vec2::new(paddle.center_x(), paddle.y + paddle.height / 2.0),
            radius: 12.0,
            vy: 200.0,
            color: 0xc4b5fd,
            special,
            caught: false,
        };
        game.state.balls.push(ball);
    }

    #[test]
    fn test_idle_frame_does_nothing() {
        let (mut game, audio) = recording_game();
        assert!(game.frame(DT, &TickInput::default()).is_empty());
        assert_eq!(game.state.time, 0.0);
        assert!(audio.music.borrow().is_empty());
    }

    #[test]
    fn test_clock_accumulates_only_while_running() {
        let mut game = Game::new(1, Settings::default());
        game.start();
        for _ in 0..10 {
            game.frame(DT, &TickInput::default());
        }
        let paused_at = game.state.time;
        assert!((paused_at - 10.0 * DT as f64).abs() < 1e-6);

        game.pause();
        for _ in 0..100 {
            game.frame(DT, &TickInput::default());
        }
        assert_eq!(game.state.time, paused_at);

        // Resume continues from the pause point, no jump
        game.resume();
        game.frame(5.0, &TickInput::default());
        let expected = paused_at + game.state.tuning.max_dt as f64;
        assert!((game.state.time - expected).abs() < 1e-6);
    }

    #[test]
    fn test_catch_plays_cue_and_bursts() {
        let (mut game, audio) = recording_game();
        game.start();
        drop_on_paddle(&mut game, true);

        let events = game.frame(DT, &TickInput::default());

        assert!(matches!(events.as_slice(), [GameEvent::Caught { special: true, .. }]));
        assert_eq!(*audio.cues.borrow(), vec![SoundCue::SpecialCatch]);
        assert!(!game.feedback.particles.is_empty());
        assert!(game.state.events.is_empty());
    }

    #[test]
    fn test_music_follows_phases() {
        let (mut game, audio) = recording_game();
        game.start();
        game.pause();
        game.resume();
        assert_eq!(
            *audio.music.borrow(),
            vec![Some(MusicTrack::Gameplay), None, Some(MusicTrack::Gameplay)]
        );
    }

    #[test]
    fn test_game_over_switches_music() {
        let (mut game, audio) = recording_game();
        game.start();
        game.state.stats.lives = 1;
        game.state.paddle.x = 0.0;
        let id = game.state.next_entity_id();
        let tuning = game.state.tuning.clone();
        game.state.balls.push(Ball {
            id,
            pos: Vec2::new(tuning.arena_width - 20.0, tuning.arena_height + 11.9),
            radius: 12.0,
            vy: 200.0,
            color: 0,
            special: false,
            caught: false,
        });

        let events = game.frame(DT, &TickInput::default());

        assert_eq!(game.phase(), GamePhase::Ended);
        assert!(events.contains(&GameEvent::GameOver { final_score: 0 }));
        assert_eq!(audio.cues.borrow().last(), Some(&SoundCue::GameOver));
        assert_eq!(audio.music.borrow().last(), Some(&Some(MusicTrack::Death)));
        assert!(game.feedback.shake.is_active());

        // Restart wipes particles and stats
        assert!(game.start());
        assert_eq!(game.state.stats.lives, game.state.tuning.max_lives);
        assert!(!game.feedback.shake.is_active());
    }

    #[test]
    fn test_muted_sfx_skips_audio() {
        let audio = RecordingAudio::default();
        let settings = Settings {
            sfx_volume: 0.0,
            ..Default::default()
        };
        let mut game =
            Game::with_audio(3, settings, Tuning::default(), Box::new(audio.clone()));
        game.start();
        drop_on_paddle(&mut game, false);
        game.frame(DT, &TickInput::default());
        assert!(audio.cues.borrow().is_empty());
        assert_eq!(game.state.stats.score, 2);
    }

    #[test]
    fn test_set_difficulty_reaches_spawner() {
        let mut game = Game::new(1, Settings::default());
        game.set_difficulty(Difficulty::Easy);
        assert_eq!(game.state.difficulty, Difficulty::Easy);
        assert_eq!(game.settings().difficulty, Difficulty::Easy);

        game.set_settings(Settings {
            difficulty: Difficulty::Hard,
            ..Default::default()
        });
        assert_eq!(game.state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = Game::new(1, Settings::default());
        game.start();
        drop_on_paddle(&mut game, false);
        let snap = game.snapshot();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.balls.len(), 1);
        assert_eq!(snap.hud.score, 0);
    }
}
