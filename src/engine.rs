//! Step-driven mode engines.
//!
//! Each mode is a state machine advanced by [`Engine::step`]. A step never
//! blocks; it returns an [`EngineStep`] telling the driver what to wait for
//! before the next step. [`run_engine`] is the only place where the firmware
//! actually suspends, which keeps every suspension point explicit and lets
//! tests drive an engine one step at a time.

use crate::hardware::{Peripherals, Platform, PlatformDuration};
use crate::time::TimeDuration;
use crate::types::KeyEvent;

/// What an engine needs before it can make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineStep<D> {
    /// Step again with the next queued key event, if any.
    ///
    /// The driver waits at most the configured poll interval between empty polls.
    Poll,

    /// Hold the current output for this long, then step again without reading keys.
    ///
    /// Presses made meanwhile stay queued in the key source.
    Delay(D),

    /// Step again with the next key press, however long that takes.
    AwaitPress,

    /// The session is over; return control to the menu.
    Exit,
}

/// A mode that runs until its session ends.
pub trait Engine<P: Platform> {
    /// Advances the state machine once.
    ///
    /// `event` is the transition read in response to the previous step's
    /// `Poll` or `AwaitPress`, and is always `None` after `Delay` and on the
    /// first step.
    fn step(
        &mut self,
        io: &mut Peripherals<'_, P>,
        event: Option<KeyEvent>,
    ) -> EngineStep<PlatformDuration<P>>;
}

/// Why a game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOverReason {
    /// A press did not match the expected key.
    WrongKey,
    /// No press arrived inside the reaction window.
    TooSlow,
    /// The memory sequence reached its capacity.
    SequenceComplete,
}

/// Final result of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameOver {
    /// Completed rounds (memory) or hits (mole). The failing round never counts.
    pub score: u32,
    pub reason: GameOverReason,
}

/// Drives `engine` until it returns [`EngineStep::Exit`].
///
/// `poll_interval` bounds how long an empty poll waits before the engine is
/// stepped again, so timed engines never overshoot their windows by more than
/// that.
pub fn run_engine<P, E>(
    engine: &mut E,
    io: &mut Peripherals<'_, P>,
    poll_interval: PlatformDuration<P>,
) where
    P: Platform,
    E: Engine<P>,
{
    let mut event = None;

    loop {
        match engine.step(io, event.take()) {
            EngineStep::Poll => {
                event = io.keys.poll_nonblocking();
                if event.is_none() && poll_interval != <PlatformDuration<P> as TimeDuration>::ZERO {
                    io.delay(poll_interval);
                }
            }
            EngineStep::Delay(duration) => io.delay(duration),
            EngineStep::AwaitPress => event = Some(io.keys.wait_blocking()),
            EngineStep::Exit => return,
        }
    }
}
