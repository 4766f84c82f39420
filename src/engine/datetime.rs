use std::collections::BTreeSet;

use chrono::{NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::util::clock::{Clock, SystemClock, truncate_subseconds};

/// Canonical rendering, tried first by the parser and produced by
/// [`format_system_datetime`].
pub const SYSTEM_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date layouts accepted in combined date+time input, in priority order.
pub const DATE_FORMATS: [&str; 9] = [
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y%m%d",
    "%d. %m. %Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%d%m%y",
    "%m%d%y",
    "%y%m%d",
];

/// Time layouts accepted standalone or in combined input, in priority order.
pub const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M:%S %p"];

/// No candidate layout matched the entire input string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format: `{input}`")]
pub struct InvalidFormat {
    pub input: String,
}

/// Lenient datetime parser over an ordered list of candidate layouts.
///
/// Candidates are tried in a fixed priority order and the first layout that
/// consumes the entire input wins: the canonical `YYYY-MM-DD HH:MM` form,
/// then each time-only layout (rebased onto today's UTC date), then every
/// `time date` / `date time` concatenation. Results are UTC-naive with
/// sub-second precision truncated.
///
/// `None` input, or input that case-insensitively equals `now` or one of the
/// configured aliases, resolves to the clock's current time.
pub struct DatetimeParser<C = SystemClock> {
    clock: C,
    now_aliases: BTreeSet<String>,
    rebase: bool,
}

impl DatetimeParser<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DatetimeParser<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DatetimeParser<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            now_aliases: BTreeSet::from(["now".to_string()]),
            rebase: true,
        }
    }

    /// Register additional spellings of "now" (localized equivalents).
    /// Matching is case-insensitive and trims surrounding whitespace; the
    /// built-in `now` alias always stays registered.
    pub fn now_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.now_aliases
            .extend(aliases.into_iter().map(|alias| alias.into().to_lowercase()));
        self
    }

    /// Accepted for callers that track a display timezone. Parsed values
    /// carry no offset, so the flag never changes the result: output is
    /// always UTC-naive.
    pub fn rebase(mut self, rebase: bool) -> Self {
        self.rebase = rebase;
        self
    }

    pub fn is_rebasing(&self) -> bool {
        self.rebase
    }

    /// Parse `input` into a UTC-naive timestamp with whole-second precision.
    pub fn parse(&self, input: Option<&str>) -> Result<NaiveDateTime, InvalidFormat> {
        let Some(input) = input else {
            return Ok(self.clock.now_utc());
        };
        if self.is_now_alias(input) {
            return Ok(self.clock.now_utc());
        }

        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, SYSTEM_FORMAT) {
            return Ok(truncate_subseconds(parsed));
        }

        // Time-only input applies to today's date in UTC.
        for layout in TIME_FORMATS {
            if let Ok(time) = NaiveTime::parse_from_str(input, layout) {
                let today = self.clock.now_utc().date();
                return Ok(truncate_subseconds(today.and_time(time)));
            }
        }

        for time_layout in TIME_FORMATS {
            for date_layout in DATE_FORMATS {
                let combined = [
                    format!("{time_layout} {date_layout}"),
                    format!("{date_layout} {time_layout}"),
                ];
                for layout in &combined {
                    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, layout) {
                        return Ok(truncate_subseconds(parsed));
                    }
                }
            }
        }

        Err(InvalidFormat {
            input: input.to_string(),
        })
    }

    fn is_now_alias(&self, input: &str) -> bool {
        self.now_aliases.contains(&input.trim().to_lowercase())
    }
}

/// Render a timestamp in the canonical `YYYY-MM-DD HH:MM` form
/// (zero-padded, no seconds). Total for any valid timestamp.
pub fn format_system_datetime(value: &NaiveDateTime) -> String {
    value.format(SYSTEM_FORMAT).to_string()
}
