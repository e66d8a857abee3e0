//! Pacing and difficulty configuration.

use crate::time::TimeDuration;

/// Every timing constant used by the controller and the game engines.
///
/// Build with [`GameConfig::builder`], which starts from the device defaults, or
/// use [`GameConfig::default`].
///
/// # Type Parameters
/// * `D` - The duration type of the platform's time source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig<D: TimeDuration> {
    /// Minimum time between clock redraws on the menu screen.
    pub menu_refresh: D,
    /// "Loading..." hold before a mode starts.
    pub dispatch_pause: D,
    /// Upper bound on the gap between two empty key polls.
    pub poll_interval: D,

    pub memory_intro: D,
    pub memory_announce: D,
    pub playback_on: D,
    pub playback_off: D,
    /// Green pulse after each correctly repeated key.
    pub feedback_pulse: D,
    pub round_won_pause: D,
    pub memory_game_over_hold: D,

    pub mole_intro: D,
    /// Reaction window of the first mole, in seconds.
    pub mole_initial_timeout: f32,
    /// The reaction window never shrinks below this, in seconds.
    pub mole_timeout_floor: f32,
    /// Factor applied to the reaction window after every hit.
    pub mole_speedup: f32,
    pub mole_hit_pause: D,
    pub mole_game_over_hold: D,

    /// How long key 0 must stay down to leave numpad mode.
    pub numpad_exit_hold: D,

    /// Pause after each key in the clock-set screen.
    pub clock_set_repeat_pause: D,
}

impl<D: TimeDuration> GameConfig<D> {
    /// Creates a builder seeded with the device defaults.
    pub fn builder() -> GameConfigBuilder<D> {
        GameConfigBuilder::new()
    }

    fn device_defaults() -> Self {
        Self {
            menu_refresh: D::from_millis(1000),
            dispatch_pause: D::from_millis(500),
            poll_interval: D::from_millis(1),
            memory_intro: D::from_millis(1000),
            memory_announce: D::from_millis(1000),
            playback_on: D::from_millis(600),
            playback_off: D::from_millis(200),
            feedback_pulse: D::from_millis(100),
            round_won_pause: D::from_millis(500),
            memory_game_over_hold: D::from_millis(3000),
            mole_intro: D::from_millis(1500),
            mole_initial_timeout: 2.0,
            mole_timeout_floor: 0.5,
            mole_speedup: 0.95,
            mole_hit_pause: D::from_millis(200),
            mole_game_over_hold: D::from_millis(2000),
            numpad_exit_hold: D::from_millis(2000),
            clock_set_repeat_pause: D::from_millis(200),
        }
    }
}

impl<D: TimeDuration> Default for GameConfig<D> {
    fn default() -> Self {
        Self::device_defaults()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The menu clock would redraw on every loop iteration.
    ZeroMenuRefresh,

    /// Any tap on key 0 would leave numpad mode.
    ZeroExitHold,

    /// The speed-up factor must be in (0, 1].
    InvalidSpeedup,

    /// The timeout floor must be positive.
    InvalidTimeoutFloor,

    /// The first reaction window is shorter than the floor.
    InitialTimeoutBelowFloor,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroMenuRefresh => {
                write!(f, "menu refresh interval must be non-zero")
            }
            ConfigError::ZeroExitHold => {
                write!(f, "numpad exit hold must be non-zero")
            }
            ConfigError::InvalidSpeedup => {
                write!(f, "mole speed-up factor must be greater than 0 and at most 1")
            }
            ConfigError::InvalidTimeoutFloor => {
                write!(f, "mole timeout floor must be positive")
            }
            ConfigError::InitialTimeoutBelowFloor => {
                write!(f, "mole initial timeout must not be below the timeout floor")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Builder for constructing a validated [`GameConfig`].
#[derive(Debug)]
pub struct GameConfigBuilder<D: TimeDuration> {
    config: GameConfig<D>,
}

impl<D: TimeDuration> GameConfigBuilder<D> {
    /// Creates a builder holding the device defaults.
    pub fn new() -> Self {
        Self {
            config: GameConfig::device_defaults(),
        }
    }

    pub fn menu_refresh(mut self, interval: D) -> Self {
        self.config.menu_refresh = interval;
        self
    }

    pub fn dispatch_pause(mut self, pause: D) -> Self {
        self.config.dispatch_pause = pause;
        self
    }

    pub fn poll_interval(mut self, interval: D) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Sets the intro and per-round announcement holds of the memory game.
    pub fn memory_announcements(mut self, intro: D, announce: D) -> Self {
        self.config.memory_intro = intro;
        self.config.memory_announce = announce;
        self
    }

    /// Sets how long each sequence key is lit and the gap after it.
    pub fn playback(mut self, on: D, off: D) -> Self {
        self.config.playback_on = on;
        self.config.playback_off = off;
        self
    }

    pub fn feedback_pulse(mut self, pulse: D) -> Self {
        self.config.feedback_pulse = pulse;
        self
    }

    pub fn round_won_pause(mut self, pause: D) -> Self {
        self.config.round_won_pause = pause;
        self
    }

    pub fn memory_game_over_hold(mut self, hold: D) -> Self {
        self.config.memory_game_over_hold = hold;
        self
    }

    pub fn mole_intro(mut self, intro: D) -> Self {
        self.config.mole_intro = intro;
        self
    }

    /// Sets the first reaction window, its floor, and the per-hit factor.
    pub fn mole_difficulty(mut self, initial_secs: f32, floor_secs: f32, speedup: f32) -> Self {
        self.config.mole_initial_timeout = initial_secs;
        self.config.mole_timeout_floor = floor_secs;
        self.config.mole_speedup = speedup;
        self
    }

    pub fn mole_hit_pause(mut self, pause: D) -> Self {
        self.config.mole_hit_pause = pause;
        self
    }

    pub fn mole_game_over_hold(mut self, hold: D) -> Self {
        self.config.mole_game_over_hold = hold;
        self
    }

    pub fn numpad_exit_hold(mut self, hold: D) -> Self {
        self.config.numpad_exit_hold = hold;
        self
    }

    pub fn clock_set_repeat_pause(mut self, pause: D) -> Self {
        self.config.clock_set_repeat_pause = pause;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroMenuRefresh` - `menu_refresh` is zero
    /// * `ZeroExitHold` - `numpad_exit_hold` is zero
    /// * `InvalidSpeedup` - `mole_speedup` is not in (0, 1]
    /// * `InvalidTimeoutFloor` - `mole_timeout_floor` is not positive
    /// * `InitialTimeoutBelowFloor` - the first window is below the floor
    pub fn build(self) -> Result<GameConfig<D>, ConfigError> {
        let config = self.config;

        if config.menu_refresh == D::ZERO {
            return Err(ConfigError::ZeroMenuRefresh);
        }
        if config.numpad_exit_hold == D::ZERO {
            return Err(ConfigError::ZeroExitHold);
        }
        // Negated comparisons also reject NaN.
        if !(config.mole_speedup > 0.0 && config.mole_speedup <= 1.0) {
            return Err(ConfigError::InvalidSpeedup);
        }
        if !(config.mole_timeout_floor > 0.0) {
            return Err(ConfigError::InvalidTimeoutFloor);
        }
        if !(config.mole_initial_timeout >= config.mole_timeout_floor) {
            return Err(ConfigError::InitialTimeoutBelowFloor);
        }

        Ok(config)
    }
}

impl<D: TimeDuration> Default for GameConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
