//! Clock port for time-dependent logic
//!
//! Rating and reference numbering both sample the current time. Routing
//! those samples through a trait keeps the call sites deterministic under
//! test: production code injects [`SystemClock`], tests inject a
//! [`FixedClock`] pinned to a known instant.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current calendar year
    fn current_year(&self) -> i32 {
        self.today().year()
    }
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock pinned to midnight UTC on the given date
    pub fn at_midnight(year: i32, month: u32, day: u32) -> Self {
        Self {
            instant: Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock::at_midnight(2024, 3, 15);
        assert_eq!(clock.current_year(), 2024);
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
