//! Fixed-capacity display lines.

use crate::types::TimeOfDay;
use core::fmt::Write;
use heapless::String;

/// Longest line any screen produces, with headroom.
pub const LINE_CAPACITY: usize = 24;

/// One row of display text.
pub type Line = String<LINE_CAPACITY>;

/// Formats into a fresh [`Line`], truncating on overflow.
pub fn line(args: core::fmt::Arguments<'_>) -> Line {
    let mut out = Line::new();
    let _ = Truncating(&mut out).write_fmt(args);
    out
}

/// Writer that drops whatever does not fit instead of failing the whole write.
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// `TIME: HH:MM:SS`
pub fn clock_line(time: TimeOfDay) -> Line {
    line(format_args!(
        "TIME: {:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    ))
}

/// `HH:MM (3=OK)`
pub fn clock_set_line(time: TimeOfDay) -> Line {
    line(format_args!("{:02}:{:02} (3=OK)", time.hour(), time.minute()))
}
