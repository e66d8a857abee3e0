//! Integration tests for ClockSet

mod common;
use common::*;

use keypad_arcade::{
    ClockSet, ClockSetAction, DateTime, Engine, EngineStep, GameConfig, KeyEvent, TimeOfDay,
    run_engine,
};

/// Runs a clock-set session to completion. Every scripted press is queued at
/// time zero since the engine blocks for presses.
fn run_clock_set<'t>(
    time: &'t MockTimeSource,
    rtc: MockRtc,
    script: impl FnOnce(&mut ScriptedKeys),
) -> MockIo<'t> {
    let mut keys = ScriptedKeys::new(time.clone());
    script(&mut keys);

    let mut io = mock_io(time, keys, &[0]);
    io.clock = rtc;
    let mut clock_set = ClockSet::new(GameConfig::default());
    run_engine(&mut clock_set, &mut io, TestDuration(1));
    io
}

fn saved_time(io: &MockIo<'_>) -> TimeOfDay {
    assert_eq!(io.clock.writes.len(), 1);
    io.clock.writes[0].time
}

#[test]
fn hour_up_wraps_past_23() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(23, 15, 42), |keys| {
        keys.tap(0).tap(3);
    });

    assert_eq!(saved_time(&io), TimeOfDay::new(0, 15, 0).unwrap());
}

#[test]
fn minute_down_wraps_below_zero() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(8, 0, 10), |keys| {
        keys.tap(5).tap(3);
    });

    assert_eq!(saved_time(&io), TimeOfDay::new(8, 59, 0).unwrap());
}

#[test]
fn hour_down_and_minute_up_wrap_independently() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(0, 59, 0), |keys| {
        keys.tap(4).tap(1).tap(1).tap(3);
    });

    assert_eq!(saved_time(&io), TimeOfDay::new(23, 1, 0).unwrap());
}

#[test]
fn commit_clears_seconds_and_keeps_date() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(9, 30, 59), |keys| {
        keys.tap(3);
    });

    let saved = io.clock.writes[0];
    assert_eq!(
        saved,
        DateTime {
            year: 2025,
            month: 6,
            day: 15,
            time: TimeOfDay::new(9, 30, 0).unwrap(),
        }
    );
}

#[test]
fn unbound_keys_are_ignored() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(10, 10, 0), |keys| {
        keys.tap(2).tap(6).tap(15).tap(9).tap(3);
    });

    assert_eq!(saved_time(&io), TimeOfDay::new(10, 10, 0).unwrap());
}

#[test]
fn display_refreshes_after_every_key() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(23, 15, 0), |keys| {
        keys.tap(0).tap(1).tap(3);
    });

    let lines: Vec<(&str, &str)> = io
        .display
        .screens
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("SET TIME:", "23:15 (3=OK)"),
            ("SET TIME:", "00:15 (3=OK)"),
            ("SET TIME:", "00:16 (3=OK)"),
        ]
    );
}

#[test]
fn each_edit_pauses_before_next_read() {
    let time = MockTimeSource::new();
    let io = run_clock_set(&time, MockRtc::at(12, 0, 0), |keys| {
        keys.tap(0).tap(0).tap(3);
    });

    assert_eq!(time.millis(), 2 * 200);
    assert_eq!(saved_time(&io), TimeOfDay::new(14, 0, 0).unwrap());
}

#[test]
fn blocks_on_presses_until_commit() {
    let time = MockTimeSource::new();
    let keys = ScriptedKeys::new(time.clone());
    let mut io = mock_io(&time, keys, &[0]);
    let mut clock_set = ClockSet::<TestDuration>::new(GameConfig::default());

    assert_eq!(clock_set.step(&mut io, None), EngineStep::AwaitPress);
    assert_eq!(clock_set.working().map(|w| w.time), TimeOfDay::new(12, 0, 0).ok());

    assert_eq!(
        clock_set.step(&mut io, Some(KeyEvent::pressed(key(1)))),
        EngineStep::Delay(TestDuration(200))
    );
    assert_eq!(clock_set.step(&mut io, None), EngineStep::AwaitPress);
    assert!(io.clock.writes.is_empty());

    assert_eq!(
        clock_set.step(&mut io, Some(KeyEvent::pressed(key(3)))),
        EngineStep::Exit
    );
    assert!(clock_set.is_committed());
    assert_eq!(io.clock.now.time, TimeOfDay::new(12, 1, 0).unwrap());
}

#[test]
fn key_bindings() {
    assert_eq!(ClockSetAction::from_key(key(0)), Some(ClockSetAction::HourUp));
    assert_eq!(ClockSetAction::from_key(key(4)), Some(ClockSetAction::HourDown));
    assert_eq!(ClockSetAction::from_key(key(1)), Some(ClockSetAction::MinuteUp));
    assert_eq!(ClockSetAction::from_key(key(5)), Some(ClockSetAction::MinuteDown));
    assert_eq!(ClockSetAction::from_key(key(3)), Some(ClockSetAction::Commit));
    assert_eq!(ClockSetAction::from_key(key(7)), None);
}
