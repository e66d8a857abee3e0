#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ModeController`**: Owns the peripherals, draws the clock and menu, and runs one mode at a time
//! - **`Engine`**: A mode as a non-blocking state machine, advanced by `step`
//! - **`EngineStep`**: What an engine waits for next (`Poll`, `Delay`, `AwaitPress`, `Exit`)
//! - **`MemoryGame`**, **`MoleGame`**, **`Numpad`**, **`ClockSet`**: The four modes
//! - **`GameConfig`**: Every pause, window and threshold, validated by its builder
//! - **`Platform`** / **`Peripherals`**: The board's collaborator types and the bundle that owns them
//! - **`Display`**, **`Indicator`**, **`KeySource`**, **`Keyboard`**, **`RealTimeClock`**: Traits to implement for your hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Indicator colors are `Srgb<u8>` (0-255 per channel). Randomness comes from any
//! `rand_core::RngCore`, so tests can script exact sequences.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod clock_set;
pub mod colors;
pub mod config;
pub mod controller;
pub mod engine;
pub mod hardware;
pub mod input;
pub mod memory;
pub mod mole;
pub mod numpad;
pub mod text;
pub mod time;
pub mod types;

pub use clock_set::{ClockSet, ClockSetAction};
pub use config::{ConfigError, GameConfig, GameConfigBuilder};
pub use controller::{MENU_HINT, ModeController};
pub use engine::{Engine, EngineStep, GameOver, GameOverReason, run_engine};
pub use hardware::{
    Display, Indicator, Keyboard, Peripherals, Platform, PlatformDuration, RealTimeClock,
};
pub use input::{KeyInput, KeySource};
pub use memory::{MemoryGame, MemoryPhase, MemorySession, SEQUENCE_CAPACITY};
pub use mole::{MoleGame, MolePhase, MoleSession};
pub use numpad::{EXIT_KEY, NUMPAD_KEYMAP, Numpad, NumpadPhase, keycode_for};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    DateTime, KEY_COUNT, KeyEvent, KeyIndex, KeyIndexError, Keycode, Mode, TimeError, TimeOfDay,
    Transition,
};
