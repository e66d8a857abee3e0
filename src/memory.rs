//! Growing-sequence memory game.
//!
//! Each round appends one random key, plays the whole sequence back on the
//! display and indicator, then checks the player's replay key by key. The
//! first wrong key ends the session.

use crate::colors;
use crate::config::GameConfig;
use crate::engine::{Engine, EngineStep, GameOver, GameOverReason};
use crate::hardware::{Peripherals, Platform, PlatformDuration};
use crate::text::line;
use crate::time::TimeDuration;
use crate::types::{KeyEvent, KeyIndex};
use heapless::Vec;
use rand_core::RngCore;

/// Longest sequence a session can reach.
pub const SEQUENCE_CAPACITY: usize = 64;

/// Where the memory game is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryPhase {
    /// Title screen, shown once per session.
    Intro,
    /// Append a key and announce the level.
    Announce,
    /// Sequence key at this position is lit.
    ShowKey(usize),
    /// Dark gap after the key at this position.
    Gap(usize),
    /// Hand over to the player.
    Prompt,
    /// Waiting for the key at this position.
    AwaitInput(usize),
    /// Green pulse after the key at this position matched.
    Feedback(usize),
    /// Final screen is up; exit on the next step.
    Finished,
}

/// The sequence and score of one memory game.
///
/// While a round's input is being checked, `sequence().len() == score() + 1`.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    sequence: Vec<KeyIndex, SEQUENCE_CAPACITY>,
    score: u32,
}

impl MemorySession {
    /// Keys to repeat, oldest first.
    pub fn sequence(&self) -> &[KeyIndex] {
        &self.sequence
    }

    /// Number of fully repeated rounds.
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Memory game engine.
pub struct MemoryGame<D: TimeDuration> {
    config: GameConfig<D>,
    phase: MemoryPhase,
    session: MemorySession,
    outcome: Option<GameOver>,
}

impl<D: TimeDuration> MemoryGame<D> {
    /// Creates a fresh session at score 0 with an empty sequence.
    pub fn new(config: GameConfig<D>) -> Self {
        Self {
            config,
            phase: MemoryPhase::Intro,
            session: MemorySession::default(),
            outcome: None,
        }
    }

    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    pub fn session(&self) -> &MemorySession {
        &self.session
    }

    /// The result, once the session has ended.
    pub fn outcome(&self) -> Option<GameOver> {
        self.outcome
    }

    fn finish<P: Platform>(
        &mut self,
        io: &mut Peripherals<'_, P>,
        reason: GameOverReason,
    ) -> EngineStep<D> {
        let score = self.session.score;
        match reason {
            GameOverReason::SequenceComplete => {
                io.led(colors::SUCCESS);
                io.show("YOU WIN!", &line(format_args!("Score: {}", score)));
            }
            _ => {
                io.led(colors::ERROR);
                io.show("GAME OVER", &line(format_args!("Score: {}", score)));
            }
        }

        #[cfg(feature = "defmt")]
        defmt::info!("memory: game over with score {}", score);

        self.outcome = Some(GameOver { score, reason });
        self.phase = MemoryPhase::Finished;
        EngineStep::Delay(self.config.memory_game_over_hold)
    }
}

impl<P: Platform> Engine<P> for MemoryGame<PlatformDuration<P>> {
    fn step(
        &mut self,
        io: &mut Peripherals<'_, P>,
        event: Option<KeyEvent>,
    ) -> EngineStep<PlatformDuration<P>> {
        match self.phase {
            MemoryPhase::Intro => {
                io.show("Memory Game!", "Get ready...");
                self.phase = MemoryPhase::Announce;
                EngineStep::Delay(self.config.memory_intro)
            }
            MemoryPhase::Announce => {
                let key = KeyIndex::from_random(io.rng.next_u32());
                if self.session.sequence.push(key).is_err() {
                    return self.finish(io, GameOverReason::SequenceComplete);
                }

                #[cfg(feature = "defmt")]
                defmt::debug!("memory: level {} appends key {}", self.session.score + 1, key.get());

                io.show(&line(format_args!("Level {}", self.session.score + 1)), "Watch...");
                self.phase = MemoryPhase::ShowKey(0);
                EngineStep::Delay(self.config.memory_announce)
            }
            MemoryPhase::ShowKey(position) => {
                let key = self.session.sequence[position];
                io.show(&line(format_args!("KEY: {}", key)), "");
                io.led(colors::PLAYBACK);
                self.phase = MemoryPhase::Gap(position);
                EngineStep::Delay(self.config.playback_on)
            }
            MemoryPhase::Gap(position) => {
                io.show("", "");
                io.led(colors::OFF);
                self.phase = if position + 1 < self.session.sequence.len() {
                    MemoryPhase::ShowKey(position + 1)
                } else {
                    MemoryPhase::Prompt
                };
                EngineStep::Delay(self.config.playback_off)
            }
            MemoryPhase::Prompt => {
                debug_assert_eq!(self.session.sequence.len(), self.session.score as usize + 1);

                io.show("Your Turn!", "");
                io.led(colors::INPUT_WAIT);
                self.phase = MemoryPhase::AwaitInput(0);
                EngineStep::Poll
            }
            MemoryPhase::AwaitInput(position) => {
                let Some(pressed) = event.and_then(|e| e.press()) else {
                    return EngineStep::Poll;
                };

                if pressed != self.session.sequence[position] {
                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "memory: expected {} got {}",
                        self.session.sequence[position].get(),
                        pressed.get()
                    );
                    return self.finish(io, GameOverReason::WrongKey);
                }

                io.led(colors::SUCCESS);
                self.phase = MemoryPhase::Feedback(position);
                EngineStep::Delay(self.config.feedback_pulse)
            }
            MemoryPhase::Feedback(position) => {
                if position + 1 < self.session.sequence.len() {
                    io.led(colors::INPUT_WAIT);
                    self.phase = MemoryPhase::AwaitInput(position + 1);
                    return EngineStep::Poll;
                }

                self.session.score += 1;

                #[cfg(feature = "defmt")]
                defmt::info!("memory: round won, score {}", self.session.score);

                io.led(colors::SUCCESS);
                io.show("Correct!", "");
                self.phase = MemoryPhase::Announce;
                EngineStep::Delay(self.config.round_won_pause)
            }
            MemoryPhase::Finished => EngineStep::Exit,
        }
    }
}
