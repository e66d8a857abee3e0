//! Time abstraction traits for platform-agnostic timing.
//!
//! Every pause, feedback pulse and game timeout goes through these traits, so a
//! board crate can back them with a hardware timer and tests can back them with
//! a simulated clock that never actually sleeps.

/// Trait for abstracting the monotonic time source.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;

    /// Blocks the caller for `duration`.
    ///
    /// A simulated source advances its clock instead of waiting.
    fn delay(&self, duration: I::Duration);
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Creates duration from fractional seconds, truncated to whole milliseconds.
    fn from_secs_f32(secs: f32) -> Self {
        Self::from_millis((secs * 1000.0) as u64)
    }

    /// Returns true if this duration is at least `other`.
    fn reached(&self, other: Self) -> bool {
        self.as_millis() >= other.as_millis()
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
