//! Source of "now" for the web layer
//!
//! The classifier only ever sees the instant it is handed; the server asks a
//! [`Clock`] so tests can pin time.

use chrono::{Local, NaiveDateTime};
use std::fmt::Debug;

/// Supplies the current local wall-clock time
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Server local time
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub const fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_is_stable() {
        let at = NaiveDate::from_ymd_opt(2024, 7, 6)
            .unwrap()
            .and_hms_opt(5, 45, 0)
            .unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }
}
