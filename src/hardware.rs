//! Hardware collaborator traits.
//!
//! The controller and engines never touch registers. A board crate implements
//! these traits for its display, indicator, HID stack and RTC, names them in a
//! [`Platform`], and hands one [`Peripherals`] bundle to the
//! [`ModeController`](crate::ModeController).

use crate::input::{KeyInput, KeySource};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{DateTime, Keycode};
use palette::Srgb;
use rand_core::RngCore;

/// Trait for abstracting the two-line text display.
pub trait Display {
    /// Replaces the whole screen. An empty `line2` leaves the second row blank.
    ///
    /// Called often; implementations should make identical redraws cheap.
    fn render(&mut self, line1: &str, line2: &str);
}

/// Trait for abstracting the single RGB status pixel.
pub trait Indicator {
    /// Shows `color` immediately. Handle any hardware errors internally.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Trait for abstracting USB HID keystroke injection.
///
/// The implementation owns the set of currently pressed codes.
pub trait Keyboard {
    fn press(&mut self, code: Keycode);
    fn release(&mut self, code: Keycode);
    fn release_all(&mut self);
}

/// Trait for abstracting the battery-backed real-time clock.
pub trait RealTimeClock {
    fn datetime(&mut self) -> DateTime;
    fn set_datetime(&mut self, datetime: DateTime);
}

/// Names the concrete collaborator types of one board.
pub trait Platform {
    type Instant: TimeInstant;
    type Time: TimeSource<Self::Instant>;
    type Display: Display;
    type Indicator: Indicator;
    type Keys: KeySource;
    type Keyboard: Keyboard;
    type Clock: RealTimeClock;
    type Rng: RngCore;
}

/// Shorthand for a platform's duration type.
pub type PlatformDuration<P> = <<P as Platform>::Instant as TimeInstant>::Duration;

/// Every collaborator the controller and engines drive.
///
/// Whichever component currently holds control has exclusive use of all of
/// them, so nothing here is shared or locked.
pub struct Peripherals<'t, P: Platform> {
    pub time: &'t P::Time,
    pub display: P::Display,
    pub indicator: P::Indicator,
    pub keys: KeyInput<P::Keys>,
    pub keyboard: P::Keyboard,
    pub clock: P::Clock,
    pub rng: P::Rng,
}

impl<'t, P: Platform> Peripherals<'t, P> {
    /// Bundles the collaborators, wrapping the key source in a [`KeyInput`].
    pub fn new(
        time: &'t P::Time,
        display: P::Display,
        indicator: P::Indicator,
        keys: P::Keys,
        keyboard: P::Keyboard,
        clock: P::Clock,
        rng: P::Rng,
    ) -> Self {
        Self {
            time,
            display,
            indicator,
            keys: KeyInput::new(keys),
            keyboard,
            clock,
            rng,
        }
    }

    /// Returns the current monotonic instant.
    #[inline]
    pub fn now(&self) -> P::Instant {
        self.time.now()
    }

    /// Blocks for `duration`.
    #[inline]
    pub fn delay(&self, duration: PlatformDuration<P>) {
        self.time.delay(duration);
    }

    /// Shorthand for [`Display::render`].
    #[inline]
    pub fn show(&mut self, line1: &str, line2: &str) {
        self.display.render(line1, line2);
    }

    /// Shorthand for [`Indicator::set_color`].
    #[inline]
    pub fn led(&mut self, color: Srgb<u8>) {
        self.indicator.set_color(color);
    }
}
