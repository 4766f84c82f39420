use chrono::{NaiveDateTime, Timelike, Utc};

/// Source of the current time, UTC-naive and truncated to whole seconds.
///
/// Parsing rebases time-only input onto "today" and resolves `now` aliases
/// through this trait, so tests can pin the clock.
pub trait Clock {
    fn now_utc(&self) -> NaiveDateTime;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> NaiveDateTime {
        truncate_subseconds(Utc::now().naive_utc())
    }
}

pub fn truncate_subseconds(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_nanosecond(0)
        .expect("zero nanoseconds is always in range")
}
