//! Indicator colors.
//!
//! Each mode signals its state through a fixed color. The constants are
//! `Srgb<u8>` (0-255 per channel). Adapters driving PWM channels can convert
//! with `color.into_format::<f32>()`.

use palette::Srgb;

pub const OFF: Srgb<u8> = Srgb::new(0, 0, 0);
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
pub const PURPLE: Srgb<u8> = Srgb::new(255, 0, 255);
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);

/// Menu idle, and shown while a mode is loading.
pub const BUSY: Srgb<u8> = CYAN;

/// Memory game playback of each sequence key.
pub const PLAYBACK: Srgb<u8> = BLUE;

/// Waiting for the player to repeat the sequence.
pub const INPUT_WAIT: Srgb<u8> = YELLOW;

/// Correct key, round won, or mole hit.
pub const SUCCESS: Srgb<u8> = GREEN;

/// Game over.
pub const ERROR: Srgb<u8> = RED;

/// A mole is up.
pub const TARGET: Srgb<u8> = PURPLE;

/// Numpad relay active.
pub const NUMPAD: Srgb<u8> = WHITE;
