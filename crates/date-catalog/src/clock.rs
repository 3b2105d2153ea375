//! Sources of "now".
//!
//! A catalog reads the clock exactly once, at construction. Everything after
//! that is pure arithmetic over the snapshot, so tests pin a [`FixedClock`]
//! (or any `Fn() -> NaiveDateTime`) instead of depending on wall-clock time.

use chrono::{Local, NaiveDateTime};

/// Anything that can report the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDateTime,
{
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 12, 8)
            .unwrap()
            .and_hms_opt(15, 42, 7)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let clock = FixedClock(instant());
        assert_eq!(clock.now(), instant());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_plain_function_is_a_clock() {
        let clock = instant;
        assert_eq!(Clock::now(&clock), instant());
    }

    #[test]
    fn test_system_clock_is_within_utc_offset_range() {
        // Local wall time can step back (DST, NTP), so only bound it by the
        // widest possible UTC offset.
        let local = SystemClock.now();
        let utc = Utc::now().naive_utc();
        let drift = (local - utc).num_minutes().abs();
        assert!(drift <= 14 * 60 + 1, "local {local} vs utc {utc}");
    }
}
