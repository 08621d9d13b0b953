//! Injectable clock
//!
//! The ledger never reads the system time directly; it consumes "today"
//! through this trait so day-rollover and allowance-freeze behavior can be
//! tested with a pinned date.

use chrono::{NaiveDate, NaiveTime};

/// Source of the current date and time of day
pub trait Clock {
    /// The current calendar day
    fn today(&self) -> NaiveDate;

    /// The current wall-clock time (stamped on new entries, display-only)
    fn time_of_day(&self) -> NaiveTime;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// Clock pinned to a fixed date and time (useful for testing)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl FixedClock {
    /// Pin the clock to a date at noon
    pub fn at(date: NaiveDate) -> Self {
        Self {
            date,
            time: NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"),
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }

    fn time_of_day(&self) -> NaiveTime {
        self.time
    }
}
