//! Key matrix input.
//!
//! The matrix scanner (and its debouncing) lives in the board crate behind
//! [`KeySource`]. [`KeyInput`] wraps it with the two read styles the modes
//! need: a non-blocking poll and a blocking wait for the next press.

use crate::types::KeyEvent;

/// Trait for abstracting the debounced key matrix.
///
/// Implementations queue transitions in the order they physically happened
/// and hand each one out exactly once.
pub trait KeySource {
    /// Removes and returns the oldest pending transition, if any.
    fn next_event(&mut self) -> Option<KeyEvent>;
}

/// Event reader over a [`KeySource`].
pub struct KeyInput<K: KeySource> {
    source: K,
}

impl<K: KeySource> KeyInput<K> {
    pub fn new(source: K) -> Self {
        Self { source }
    }

    /// Returns the next pending transition without waiting.
    pub fn poll_nonblocking(&mut self) -> Option<KeyEvent> {
        self.source.next_event()
    }

    /// Spins until a press arrives. Release transitions are consumed and dropped.
    pub fn wait_blocking(&mut self) -> KeyEvent {
        loop {
            match self.poll_nonblocking() {
                Some(event) if event.is_press() => return event,
                Some(_) => {}
                None => core::hint::spin_loop(),
            }
        }
    }
}
