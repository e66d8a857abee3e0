//! Numeric keypad over USB HID.
//!
//! Every matrix transition is relayed as the matching keystroke. Releases are
//! only sent for keys whose press was relayed, so the release of the menu key
//! that opened the mode never reaches the host. Holding key 0 past the exit
//! threshold releases everything and returns to the menu.

use crate::colors;
use crate::config::GameConfig;
use crate::engine::{Engine, EngineStep};
use crate::hardware::{Keyboard, Peripherals, Platform, PlatformDuration};
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{KEY_COUNT, KeyEvent, KeyIndex, Keycode, Transition};

/// Keystroke sent for each key index, laid out like a numeric keypad.
///
/// ```text
///  7  8  9  /
///  4  5  6  *
///  1  2  3  -
///  0  .  ⏎  +
/// ```
pub const NUMPAD_KEYMAP: [Keycode; KEY_COUNT as usize] = [
    Keycode::SEVEN,
    Keycode::EIGHT,
    Keycode::NINE,
    Keycode::KEYPAD_FORWARD_SLASH,
    Keycode::FOUR,
    Keycode::FIVE,
    Keycode::SIX,
    Keycode::KEYPAD_ASTERISK,
    Keycode::ONE,
    Keycode::TWO,
    Keycode::THREE,
    Keycode::KEYPAD_MINUS,
    Keycode::ZERO,
    Keycode::KEYPAD_PERIOD,
    Keycode::ENTER,
    Keycode::KEYPAD_PLUS,
];

/// Key that doubles as the hold-to-exit gesture.
pub const EXIT_KEY: KeyIndex = match KeyIndex::new(0) {
    Ok(key) => key,
    Err(_) => panic!("exit key outside matrix"),
};

/// Returns the keystroke relayed for `key`.
#[inline]
pub fn keycode_for(key: KeyIndex) -> Keycode {
    NUMPAD_KEYMAP[key.as_usize()]
}

/// Where the numpad relay is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NumpadPhase<I> {
    /// Show the mode banner.
    Enter,
    /// Relaying transitions.
    Relay,
    /// Exit key has been down since the given instant.
    Holding { since: I },
    /// Everything released; exit on this step.
    Finished,
}

/// Numpad relay engine.
pub struct Numpad<I: TimeInstant> {
    exit_hold: I::Duration,
    phase: NumpadPhase<I>,
    relayed: u16,
}

impl<I: TimeInstant> Numpad<I> {
    pub fn new(config: GameConfig<I::Duration>) -> Self {
        Self {
            exit_hold: config.numpad_exit_hold,
            phase: NumpadPhase::Enter,
            relayed: 0,
        }
    }

    pub fn phase(&self) -> NumpadPhase<I> {
        self.phase
    }

    /// Bitmask of keys whose press was sent and not yet released, bit `n` for key `n`.
    pub fn relayed_keys(&self) -> u16 {
        self.relayed
    }

    fn relay<P: Platform>(&mut self, io: &mut Peripherals<'_, P>, event: KeyEvent) {
        let code = keycode_for(event.key);
        let bit = 1u16 << event.key.get();
        match event.transition {
            Transition::Pressed => {
                self.relayed |= bit;
                io.keyboard.press(code);
            }
            Transition::Released if self.relayed & bit != 0 => {
                self.relayed &= !bit;
                io.keyboard.release(code);
            }
            Transition::Released => {
                #[cfg(feature = "defmt")]
                defmt::debug!("numpad: dropping release of unpressed key {}", event.key.get());
            }
        }
    }
}

impl<P: Platform> Engine<P> for Numpad<P::Instant> {
    fn step(
        &mut self,
        io: &mut Peripherals<'_, P>,
        event: Option<KeyEvent>,
    ) -> EngineStep<PlatformDuration<P>> {
        match self.phase {
            NumpadPhase::Enter => {
                io.show("Numpad Mode", "Hold Key 0 Exit");
                io.led(colors::NUMPAD);
                self.phase = NumpadPhase::Relay;
                EngineStep::Poll
            }
            NumpadPhase::Relay => {
                if let Some(event) = event {
                    self.relay(io, event);
                    if event.key == EXIT_KEY && event.is_press() {
                        self.phase = NumpadPhase::Holding { since: io.now() };
                    }
                }
                EngineStep::Poll
            }
            NumpadPhase::Holding { since } => {
                if io.now().duration_since(since).reached(self.exit_hold) {
                    #[cfg(feature = "defmt")]
                    defmt::info!("numpad: exit key held, leaving");

                    io.keyboard.release_all();
                    self.relayed = 0;
                    self.phase = NumpadPhase::Finished;
                    return EngineStep::Exit;
                }

                if let Some(event) = event {
                    self.relay(io, event);
                    if event.key == EXIT_KEY && !event.is_press() {
                        self.phase = NumpadPhase::Relay;
                    }
                }
                EngineStep::Poll
            }
            NumpadPhase::Finished => EngineStep::Exit,
        }
    }
}
