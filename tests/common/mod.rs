//! Shared test infrastructure for keypad-arcade integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use keypad_arcade::{
    DateTime, Display, GameConfig, Indicator, KeyEvent, KeyIndex, KeySource, Keyboard, Keycode,
    Peripherals, Platform, RealTimeClock, Srgb, TimeDuration, TimeInstant, TimeOfDay, TimeSource,
};
use rand_core::{RngCore, impls};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Simulated clock; `delay` advances time instead of sleeping.
///
/// Clones share the same clock so the scripted key source can see it.
#[derive(Clone)]
pub struct MockTimeSource {
    current_time: Rc<Cell<u64>>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Rc::new(Cell::new(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        self.current_time.set(self.current_time.get() + duration.0);
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get()
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        TestInstant(self.current_time.get())
    }

    fn delay(&self, duration: TestDuration) {
        self.advance(duration);
    }
}

// ============================================================================
// Scripted Key Source
// ============================================================================

/// Empty polls in a row after which a test is assumed to be stuck.
const STALL_LIMIT: u32 = 1_000_000;

/// Key source that releases each scripted event once simulated time reaches it.
pub struct ScriptedKeys {
    clock: MockTimeSource,
    script: VecDeque<(u64, KeyEvent)>,
    empty_polls: u32,
}

impl ScriptedKeys {
    pub fn new(clock: MockTimeSource) -> Self {
        Self {
            clock,
            script: VecDeque::new(),
            empty_polls: 0,
        }
    }

    /// Queues `event` to become visible at `at_ms`. Events must be added in time order.
    pub fn at(&mut self, at_ms: u64, event: KeyEvent) -> &mut Self {
        self.script.push_back((at_ms, event));
        self
    }

    /// Queues a press that is available immediately.
    pub fn press(&mut self, index: u8) -> &mut Self {
        self.at(0, KeyEvent::pressed(key(index)))
    }

    /// Queues a press followed by its release, both available immediately.
    pub fn tap(&mut self, index: u8) -> &mut Self {
        self.at(0, KeyEvent::pressed(key(index)));
        self.at(0, KeyEvent::released(key(index)))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Option<KeyEvent> {
        match self.script.front() {
            Some((at, _)) if *at <= self.clock.millis() => {
                self.empty_polls = 0;
                self.script.pop_front().map(|(_, event)| event)
            }
            _ => {
                self.empty_polls += 1;
                assert!(
                    self.empty_polls < STALL_LIMIT,
                    "key script exhausted while waiting for input"
                );
                None
            }
        }
    }
}

// ============================================================================
// Recording Peripherals
// ============================================================================

/// Display that records every screen it was asked to show.
pub struct MockDisplay {
    pub screens: Vec<(String, String)>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { screens: Vec::new() }
    }

    pub fn last(&self) -> Option<(&str, &str)> {
        self.screens
            .last()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// True if any screen had `line1` as its first row.
    pub fn showed(&self, line1: &str) -> bool {
        self.screens.iter().any(|(a, _)| a == line1)
    }
}

impl Display for MockDisplay {
    fn render(&mut self, line1: &str, line2: &str) {
        self.screens.push((line1.to_string(), line2.to_string()));
    }
}

/// Indicator that records all color changes for testing
pub struct MockLed {
    pub history: Vec<Srgb<u8>>,
}

impl MockLed {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    pub fn last(&self) -> Option<Srgb<u8>> {
        self.history.last().copied()
    }
}

impl Indicator for MockLed {
    fn set_color(&mut self, color: Srgb<u8>) {
        self.history.push(color);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidReport {
    Press(Keycode),
    Release(Keycode),
    ReleaseAll,
}

/// HID keyboard that records reports and tracks held codes.
pub struct MockKeyboard {
    pub reports: Vec<HidReport>,
    pub held: Vec<Keycode>,
}

impl MockKeyboard {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
            held: Vec::new(),
        }
    }
}

impl Keyboard for MockKeyboard {
    fn press(&mut self, code: Keycode) {
        self.reports.push(HidReport::Press(code));
        self.held.push(code);
    }

    fn release(&mut self, code: Keycode) {
        self.reports.push(HidReport::Release(code));
        self.held.retain(|held| *held != code);
    }

    fn release_all(&mut self) {
        self.reports.push(HidReport::ReleaseAll);
        self.held.clear();
    }
}

/// RTC double that records writes.
pub struct MockRtc {
    pub now: DateTime,
    pub writes: Vec<DateTime>,
}

impl MockRtc {
    pub fn new(now: DateTime) -> Self {
        Self {
            now,
            writes: Vec::new(),
        }
    }

    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(DateTime {
            year: 2025,
            month: 6,
            day: 15,
            time: TimeOfDay::new(hour, minute, second).unwrap(),
        })
    }
}

impl RealTimeClock for MockRtc {
    fn datetime(&mut self) -> DateTime {
        self.now
    }

    fn set_datetime(&mut self, datetime: DateTime) {
        self.now = datetime;
        self.writes.push(datetime);
    }
}

/// RNG that replays scripted words, then repeats the last one.
pub struct ScriptedRng {
    words: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(words: &[u32]) -> Self {
        Self {
            words: words.to_vec(),
            next: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next.min(self.words.len() - 1)];
        self.next += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ============================================================================
// Mock Platform
// ============================================================================

pub struct MockPlatform;

impl Platform for MockPlatform {
    type Instant = TestInstant;
    type Time = MockTimeSource;
    type Display = MockDisplay;
    type Indicator = MockLed;
    type Keys = ScriptedKeys;
    type Keyboard = MockKeyboard;
    type Clock = MockRtc;
    type Rng = ScriptedRng;
}

/// Peripherals of the mock platform.
pub type MockIo<'t> = Peripherals<'t, MockPlatform>;

/// Builds mock peripherals around `time` with the given key script and RNG words.
pub fn mock_io<'t>(time: &'t MockTimeSource, keys: ScriptedKeys, words: &[u32]) -> MockIo<'t> {
    Peripherals::new(
        time,
        MockDisplay::new(),
        MockLed::new(),
        keys,
        MockKeyboard::new(),
        MockRtc::at(12, 0, 0),
        ScriptedRng::new(words),
    )
}

/// Device pacing with every cosmetic pause shortened to zero.
pub fn fast_config() -> GameConfig<TestDuration> {
    GameConfig::builder()
        .dispatch_pause(TestDuration(0))
        .memory_announcements(TestDuration(0), TestDuration(0))
        .playback(TestDuration(0), TestDuration(0))
        .feedback_pulse(TestDuration(0))
        .round_won_pause(TestDuration(0))
        .memory_game_over_hold(TestDuration(0))
        .mole_intro(TestDuration(0))
        .mole_hit_pause(TestDuration(0))
        .mole_game_over_hold(TestDuration(0))
        .clock_set_repeat_pause(TestDuration(0))
        .build()
        .unwrap()
}

pub fn key(index: u8) -> KeyIndex {
    KeyIndex::new(index).unwrap()
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use keypad_arcade::colors::{BUSY, ERROR, INPUT_WAIT, NUMPAD, PLAYBACK, SUCCESS, TARGET};
