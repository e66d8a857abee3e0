//! Top-level mode state machine.
//!
//! Provides [`ModeController`], which owns the peripherals, shows the clock and
//! menu, and hands control to exactly one engine at a time.

use crate::clock_set::ClockSet;
use crate::colors;
use crate::config::GameConfig;
use crate::engine::run_engine;
use crate::hardware::{Peripherals, Platform, PlatformDuration, RealTimeClock};
use crate::memory::MemoryGame;
use crate::mole::MoleGame;
use crate::numpad::Numpad;
use crate::text::clock_line;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{DateTime, Mode};

/// Second display row on the menu screen.
pub const MENU_HINT: &str = "0:Mem 1:Mol 2:Num";

/// Owns the peripherals and runs the menu loop.
///
/// Creating a controller seeds an unset RTC and lights the menu color. Call
/// [`step`](Self::step) from your own loop or hand over with [`run`](Self::run).
pub struct ModeController<'t, P: Platform> {
    io: Peripherals<'t, P>,
    config: GameConfig<PlatformDuration<P>>,
    mode: Mode,
    last_render: Option<P::Instant>,
}

impl<'t, P: Platform> ModeController<'t, P> {
    /// Takes ownership of the peripherals and prepares the menu.
    ///
    /// If the RTC reports a year before 2024 it is reset to
    /// [`DateTime::DEFAULT`] before anything is drawn.
    pub fn new(mut io: Peripherals<'t, P>, config: GameConfig<PlatformDuration<P>>) -> Self {
        if io.clock.datetime().is_unset() {
            #[cfg(feature = "defmt")]
            defmt::info!("rtc unset, seeding default time");

            io.clock.set_datetime(DateTime::DEFAULT);
        }
        io.led(colors::BUSY);

        Self {
            io,
            config,
            mode: Mode::Menu,
            last_render: None,
        }
    }

    /// The mode currently holding control.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &GameConfig<PlatformDuration<P>> {
        &self.config
    }

    pub fn peripherals(&self) -> &Peripherals<'t, P> {
        &self.io
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<'t, P> {
        &mut self.io
    }

    /// Gives the peripherals back.
    pub fn release(self) -> Peripherals<'t, P> {
        self.io
    }

    /// Runs one menu iteration.
    ///
    /// Redraws the clock if the refresh interval has passed, then polls once
    /// for a selection. A selection runs its mode to completion before this
    /// returns. Returns the mode that ran, if any.
    pub fn step(&mut self) -> Option<Mode> {
        self.refresh_clock();

        match self.io.keys.poll_nonblocking() {
            Some(event) => {
                let mode = event.press().and_then(Mode::from_menu_key)?;
                self.dispatch(mode);
                Some(mode)
            }
            None => {
                if self.config.poll_interval != <PlatformDuration<P> as TimeDuration>::ZERO {
                    self.io.delay(self.config.poll_interval);
                }
                None
            }
        }
    }

    /// Runs the menu loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Runs `mode` synchronously, then restores the menu.
    pub fn dispatch(&mut self, mode: Mode) {
        #[cfg(feature = "defmt")]
        defmt::info!("dispatching {}", mode);

        self.io.led(colors::BUSY);
        self.io.show("Loading...", "");
        self.io.delay(self.config.dispatch_pause);

        self.mode = mode;
        let config = self.config;
        let poll = config.poll_interval;
        match mode {
            Mode::Memory => run_engine(&mut MemoryGame::new(config), &mut self.io, poll),
            Mode::Mole => run_engine(&mut MoleGame::<P::Instant>::new(config), &mut self.io, poll),
            Mode::Numpad => run_engine(&mut Numpad::<P::Instant>::new(config), &mut self.io, poll),
            Mode::SetTime => run_engine(&mut ClockSet::new(config), &mut self.io, poll),
            Mode::Menu => {}
        }
        self.mode = Mode::Menu;

        #[cfg(feature = "defmt")]
        defmt::info!("back to menu");

        self.io.led(colors::BUSY);
        self.last_render = None;
    }

    fn refresh_clock(&mut self) {
        let now = self.io.now();
        let due = match self.last_render {
            None => true,
            Some(last) => now.duration_since(last).reached(self.config.menu_refresh),
        };
        if !due {
            return;
        }

        let time = self.io.clock.datetime().time;
        self.io.show(&clock_line(time), MENU_HINT);
        self.last_render = Some(now);
    }
}
