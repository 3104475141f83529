//! Session phase transitions
//!
//! ```text
//! Idle/Ended --start--> Running --pause--> Paused --resume--> Running
//!                       Running --lives exhausted--> Ended   (see tick)
//! ```
//!
//! Transitions that do not apply to the current phase are ignored and report
//! `false`.

use super::state::{GamePhase, GameState};
use crate::settings::Difficulty;

impl GameState {
    /// Begin a fresh session from Idle or Ended.
    ///
    /// Resets pools, stats and clocks before entering Running.
    pub fn start(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle | GamePhase::Ended => {
                self.reset();
                self.phase = GamePhase::Running;
                log::info!(
                    "Session started (seed {}, difficulty {})",
                    self.seed,
                    self.difficulty.as_str()
                );
                true
            }
            phase => {
                log::debug!("Ignoring start while {:?}", phase);
                false
            }
        }
    }

    /// Suspend stepping. State and the sim clock are kept as-is.
    pub fn pause(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            log::info!("Paused at t={:.2}s", self.time);
            true
        } else {
            log::debug!("Ignoring pause while {:?}", self.phase);
            false
        }
    }

    /// Continue from the pause point; the sim clock does not jump.
    pub fn resume(&mut self) -> bool {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            log::info!("Resumed at t={:.2}s", self.time);
            true
        } else {
            log::debug!("Ignoring resume while {:?}", self.phase);
            false
        }
    }

    /// Pause when Running, resume when Paused (Escape key behaviour)
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Select the difficulty used by subsequent spawns.
    ///
    /// Balls already in flight keep their speed.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log::info!(
                "Difficulty {} -> {}",
                self.difficulty.as_str(),
                difficulty.as_str()
            );
            self.difficulty = difficulty;
        }
    }

    /// Whether the driver should be stepping this state
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_start_from_idle() {
        let mut state = GameState::new(1);
        assert!(state.start());
        assert_eq!(state.phase, GamePhase::Running);
        // Starting twice is ignored
        assert!(!state.start());
    }

    #[test]
    fn test_pause_resume_cycle() {
        let mut state = GameState::new(1);
        assert!(!state.pause());
        assert!(!state.resume());

        state.start();
        state.time = 3.5;
        state.stats.score = 12;

        assert!(state.pause());
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(!state.pause());

        assert!(state.resume());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time, 3.5);
        assert_eq!(state.stats.score, 12);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = GameState::new(1);
        assert!(!state.toggle_pause());
        state.start();
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(state.toggle_pause());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_paused_state_does_not_step() {
        let mut state = GameState::new(1);
        state.start();
        state.pause();
        tick(&mut state, &TickInput::default(), 0.016, 2.0);
        assert!(state.balls.is_empty());
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_restart_after_game_over_resets() {
        let mut state = GameState::new(1);
        state.start();
        state.stats.score = 50;
        state.stats.lives = 0;
        state.time = 30.0;
        state.phase = GamePhase::Ended;
        assert!(!state.pause());

        assert!(state.start());
        assert_eq!(state.stats.score, 0);
        assert_eq!(state.stats.lives, state.tuning.max_lives);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.clock.interval, state.tuning.spawn_interval_start);
    }

    #[test]
    fn test_difficulty_survives_restart() {
        let mut state = GameState::new(1);
        state.set_difficulty(Difficulty::Easy);
        state.start();
        assert_eq!(state.difficulty, Difficulty::Easy);
        state.set_difficulty(Difficulty::Hard);
        assert_eq!(state.difficulty, Difficulty::Hard);
    }
}
