//! Whack-a-mole reflex game.
//!
//! One random key lights up per round and must be pressed inside the reaction
//! window. Every hit shrinks the window by a fixed factor down to a floor; a
//! wrong key or an expired window ends the session.

use crate::colors;
use crate::config::GameConfig;
use crate::engine::{Engine, EngineStep, GameOver, GameOverReason};
use crate::hardware::{Peripherals, Platform, PlatformDuration};
use crate::text::line;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{KeyEvent, KeyIndex};
use rand_core::RngCore;

/// Where the mole game is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MolePhase<I> {
    /// Title screen, shown once per session.
    Intro,
    /// Pick and show the next target.
    Present,
    /// Target is up since the given instant.
    Judge { since: I },
    /// Final screen is up; exit on the next step.
    Finished,
}

/// Target, reaction window and score of one mole game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoleSession {
    target: Option<KeyIndex>,
    timeout_secs: f32,
    score: u32,
}

impl MoleSession {
    /// Starts at score 0 with the given reaction window.
    pub fn new(timeout_secs: f32) -> Self {
        Self {
            target: None,
            timeout_secs,
            score: 0,
        }
    }

    /// The key currently up, once the first round has been presented.
    pub fn target(&self) -> Option<KeyIndex> {
        self.target
    }

    /// Current reaction window in seconds.
    pub fn timeout_secs(&self) -> f32 {
        self.timeout_secs
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credits a hit and shrinks the window, never below `floor`.
    pub fn record_hit(&mut self, speedup: f32, floor: f32) {
        self.score += 1;
        self.timeout_secs = (self.timeout_secs * speedup).max(floor);
    }
}

/// Whack-a-mole engine.
pub struct MoleGame<I: TimeInstant> {
    config: GameConfig<I::Duration>,
    phase: MolePhase<I>,
    session: MoleSession,
    outcome: Option<GameOver>,
}

impl<I: TimeInstant> MoleGame<I> {
    /// Creates a fresh session using the configured initial window.
    pub fn new(config: GameConfig<I::Duration>) -> Self {
        Self {
            phase: MolePhase::Intro,
            session: MoleSession::new(config.mole_initial_timeout),
            config,
            outcome: None,
        }
    }

    pub fn phase(&self) -> MolePhase<I> {
        self.phase
    }

    pub fn session(&self) -> &MoleSession {
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
    ) -> EngineStep<I::Duration> {
        let score = self.session.score;
        let headline = match reason {
            GameOverReason::TooSlow => "TOO SLOW!",
            _ => "WRONG KEY!",
        };

        #[cfg(feature = "defmt")]
        defmt::info!("mole: {} final score {}", reason, score);

        io.led(colors::ERROR);
        io.show(headline, &line(format_args!("Final: {}", score)));
        self.outcome = Some(GameOver { score, reason });
        self.phase = MolePhase::Finished;
        EngineStep::Delay(self.config.mole_game_over_hold)
    }
}

impl<P: Platform> Engine<P> for MoleGame<P::Instant> {
    fn step(
        &mut self,
        io: &mut Peripherals<'_, P>,
        event: Option<KeyEvent>,
    ) -> EngineStep<PlatformDuration<P>> {
        match self.phase {
            MolePhase::Intro => {
                io.show("Whack-a-Mole!", "Hit the key!");
                self.phase = MolePhase::Present;
                EngineStep::Delay(self.config.mole_intro)
            }
            MolePhase::Present => {
                let target = KeyIndex::from_random(io.rng.next_u32());
                self.session.target = Some(target);
                io.show(
                    &line(format_args!("HIT: {}", target)),
                    &line(format_args!("Score: {}", self.session.score)),
                );
                io.led(colors::TARGET);
                self.phase = MolePhase::Judge { since: io.now() };
                EngineStep::Poll
            }
            MolePhase::Judge { since } => {
                let window =
                    <PlatformDuration<P> as TimeDuration>::from_secs_f32(self.session.timeout_secs);
                if io.now().duration_since(since).reached(window) {
                    return self.finish(io, GameOverReason::TooSlow);
                }

                let Some(pressed) = event.and_then(|e| e.press()) else {
                    return EngineStep::Poll;
                };

                if Some(pressed) != self.session.target {
                    return self.finish(io, GameOverReason::WrongKey);
                }

                self.session
                    .record_hit(self.config.mole_speedup, self.config.mole_timeout_floor);

                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "mole: hit, score {} window {} ms",
                    self.session.score,
                    (self.session.timeout_secs * 1000.0) as u32
                );

                io.led(colors::SUCCESS);
                self.phase = MolePhase::Present;
                EngineStep::Delay(self.config.mole_hit_pause)
            }
            MolePhase::Finished => EngineStep::Exit,
        }
    }
}
