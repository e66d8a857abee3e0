//! Core value types shared by the controller and the game engines.

/// Number of keys on the matrix.
pub const KEY_COUNT: u8 = 16;

/// Rows (and columns) of the square key matrix.
pub const MATRIX_SIZE: u8 = 4;

/// Index of a key on the 4x4 matrix, always in `0..16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyIndex(u8);

impl KeyIndex {
    /// Creates a key index, rejecting values outside the matrix.
    pub const fn new(index: u8) -> Result<Self, KeyIndexError> {
        if index < KEY_COUNT {
            Ok(KeyIndex(index))
        } else {
            Err(KeyIndexError::OutOfRange(index))
        }
    }

    /// Maps a matrix position to its key index (`row * 4 + col`).
    pub const fn from_matrix(row: u8, col: u8) -> Result<Self, KeyIndexError> {
        if row >= MATRIX_SIZE || col >= MATRIX_SIZE {
            let raw = row.saturating_mul(MATRIX_SIZE).saturating_add(col);
            return Err(KeyIndexError::OutOfRange(raw));
        }
        Ok(KeyIndex(row * MATRIX_SIZE + col))
    }

    /// Reduces an arbitrary random word to a uniformly distributed key.
    ///
    /// Exact because `KEY_COUNT` divides 2^32.
    pub const fn from_random(word: u32) -> Self {
        KeyIndex((word % KEY_COUNT as u32) as u8)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the index as a `usize` for table lookups.
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for KeyIndex {
    type Error = KeyIndexError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        KeyIndex::new(value)
    }
}

impl From<KeyIndex> for u8 {
    fn from(key: KeyIndex) -> Self {
        key.0
    }
}

impl core::fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a raw value is not a valid key index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyIndexError {
    /// The value is not below [`KEY_COUNT`].
    OutOfRange(u8),
}

impl core::fmt::Display for KeyIndexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyIndexError::OutOfRange(value) => {
                write!(f, "key index {} is outside the 4x4 matrix", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeyIndexError {}

/// Direction of a key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Key went down.
    Pressed,
    /// Key came back up.
    Released,
}

/// A single debounced transition reported by the key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Which key changed.
    pub key: KeyIndex,

    /// How it changed.
    pub transition: Transition,
}

impl KeyEvent {
    /// Creates a press event.
    #[inline]
    pub const fn pressed(key: KeyIndex) -> Self {
        Self {
            key,
            transition: Transition::Pressed,
        }
    }

    /// Creates a release event.
    #[inline]
    pub const fn released(key: KeyIndex) -> Self {
        Self {
            key,
            transition: Transition::Released,
        }
    }

    /// Returns true for press transitions.
    #[inline]
    pub fn is_press(&self) -> bool {
        self.transition == Transition::Pressed
    }

    /// Returns the key if this is a press.
    #[inline]
    pub fn press(&self) -> Option<KeyIndex> {
        if self.is_press() { Some(self.key) } else { None }
    }
}

/// Top-level device mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Clock and menu screen.
    Menu,
    /// Growing-sequence memory game.
    Memory,
    /// Whack-a-mole reflex game.
    Mole,
    /// Numeric keypad over USB HID.
    Numpad,
    /// Manual clock adjustment.
    SetTime,
}

impl Mode {
    /// Maps a menu key press to the mode it selects.
    pub fn from_menu_key(key: KeyIndex) -> Option<Self> {
        match key.get() {
            0 => Some(Mode::Memory),
            1 => Some(Mode::Mole),
            2 => Some(Mode::Numpad),
            15 => Some(Mode::SetTime),
            _ => None,
        }
    }
}

/// Wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a validated time of day.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(TimeError::SecondOutOfRange(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Advances the hour by one, wrapping 23 to 0.
    pub fn increment_hour(&mut self) {
        self.hour = (self.hour + 1) % 24;
    }

    /// Moves the hour back by one, wrapping 0 to 23.
    pub fn decrement_hour(&mut self) {
        self.hour = (self.hour + 23) % 24;
    }

    /// Advances the minute by one, wrapping 59 to 0 without touching the hour.
    pub fn increment_minute(&mut self) {
        self.minute = (self.minute + 1) % 60;
    }

    /// Moves the minute back by one, wrapping 0 to 59 without touching the hour.
    pub fn decrement_minute(&mut self) {
        self.minute = (self.minute + 59) % 60;
    }

    /// Returns a copy with the seconds cleared.
    pub const fn with_zero_seconds(self) -> Self {
        Self { second: 0, ..self }
    }
}

/// Calendar date plus time of day, as stored by the RTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub time: TimeOfDay,
}

impl DateTime {
    /// Value written to the RTC when it comes up unset.
    pub const DEFAULT: DateTime = DateTime {
        year: 2025,
        month: 1,
        day: 1,
        time: TimeOfDay {
            hour: 12,
            minute: 0,
            second: 0,
        },
    };

    /// Years before this mean the backup domain lost power.
    pub const MIN_VALID_YEAR: u16 = 2024;

    /// Returns true if the RTC appears to have lost its time.
    pub fn is_unset(&self) -> bool {
        self.year < Self::MIN_VALID_YEAR
    }
}

/// Errors building a [`TimeOfDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    HourOutOfRange(u8),
    MinuteOutOfRange(u8),
    SecondOutOfRange(u8),
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::HourOutOfRange(h) => write!(f, "hour {} is not in 0-23", h),
            TimeError::MinuteOutOfRange(m) => write!(f, "minute {} is not in 0-59", m),
            TimeError::SecondOutOfRange(s) => write!(f, "second {} is not in 0-59", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

/// USB HID keyboard usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keycode(pub u8);

impl Keycode {
    pub const ONE: Keycode = Keycode(0x1E);
    pub const TWO: Keycode = Keycode(0x1F);
    pub const THREE: Keycode = Keycode(0x20);
    pub const FOUR: Keycode = Keycode(0x21);
    pub const FIVE: Keycode = Keycode(0x22);
    pub const SIX: Keycode = Keycode(0x23);
    pub const SEVEN: Keycode = Keycode(0x24);
    pub const EIGHT: Keycode = Keycode(0x25);
    pub const NINE: Keycode = Keycode(0x26);
    pub const ZERO: Keycode = Keycode(0x27);
    pub const ENTER: Keycode = Keycode(0x28);
    pub const KEYPAD_FORWARD_SLASH: Keycode = Keycode(0x54);
    pub const KEYPAD_ASTERISK: Keycode = Keycode(0x55);
    pub const KEYPAD_MINUS: Keycode = Keycode(0x56);
    pub const KEYPAD_PLUS: Keycode = Keycode(0x57);
    pub const KEYPAD_PERIOD: Keycode = Keycode(0x63);
}
