//! Manual clock adjustment.
//!
//! | key | action |
//! |-----|--------|
//! | 0 / 4 | hour up / down |
//! | 1 / 5 | minute up / down |
//! | 3 | save with seconds cleared and return |
//!
//! Other keys are ignored. There is no timeout; only the save key leaves.

use crate::config::GameConfig;
use crate::engine::{Engine, EngineStep};
use crate::hardware::{Peripherals, Platform, PlatformDuration, RealTimeClock};
use crate::text::clock_set_line;
use crate::time::TimeDuration;
use crate::types::{DateTime, KeyEvent, KeyIndex};

/// An edit the clock-set screen can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSetAction {
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    Commit,
}

impl ClockSetAction {
    /// Maps a key press to its action, `None` for unbound keys.
    pub fn from_key(key: KeyIndex) -> Option<Self> {
        match key.get() {
            0 => Some(ClockSetAction::HourUp),
            4 => Some(ClockSetAction::HourDown),
            1 => Some(ClockSetAction::MinuteUp),
            5 => Some(ClockSetAction::MinuteDown),
            3 => Some(ClockSetAction::Commit),
            _ => None,
        }
    }
}

/// Clock-set engine.
pub struct ClockSet<D: TimeDuration> {
    repeat_pause: D,
    working: Option<DateTime>,
    committed: bool,
}

impl<D: TimeDuration> ClockSet<D> {
    pub fn new(config: GameConfig<D>) -> Self {
        Self {
            repeat_pause: config.clock_set_repeat_pause,
            working: None,
            committed: false,
        }
    }

    /// The value being edited, once the RTC has been read.
    pub fn working(&self) -> Option<DateTime> {
        self.working
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

impl<P: Platform> Engine<P> for ClockSet<PlatformDuration<P>> {
    fn step(
        &mut self,
        io: &mut Peripherals<'_, P>,
        event: Option<KeyEvent>,
    ) -> EngineStep<PlatformDuration<P>> {
        if self.committed {
            return EngineStep::Exit;
        }

        let mut working = match self.working {
            Some(working) => working,
            None => io.clock.datetime(),
        };

        let Some(pressed) = event.and_then(|e| e.press()) else {
            self.working = Some(working);
            io.show("SET TIME:", &clock_set_line(working.time));
            return EngineStep::AwaitPress;
        };

        match ClockSetAction::from_key(pressed) {
            Some(ClockSetAction::HourUp) => working.time.increment_hour(),
            Some(ClockSetAction::HourDown) => working.time.decrement_hour(),
            Some(ClockSetAction::MinuteUp) => working.time.increment_minute(),
            Some(ClockSetAction::MinuteDown) => working.time.decrement_minute(),
            Some(ClockSetAction::Commit) => {
                working.time = working.time.with_zero_seconds();
                io.clock.set_datetime(working);

                #[cfg(feature = "defmt")]
                defmt::info!(
                    "clock set: saved {}:{}",
                    working.time.hour(),
                    working.time.minute()
                );

                self.working = Some(working);
                self.committed = true;
                return EngineStep::Exit;
            }
            None => {}
        }

        self.working = Some(working);
        EngineStep::Delay(self.repeat_pause)
    }
}
