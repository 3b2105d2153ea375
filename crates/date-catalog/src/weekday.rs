//! Pure date arithmetic behind every catalog entry.
//!
//! Each function takes the date of "today" (the time of day is irrelevant:
//! every rule moves in whole days and returns a date at midnight) and returns
//! a [`NaiveDate`]. Nothing here reads the system clock.
//!
//! # Functions
//!
//! - [`this_year`] / [`next_year`]: January 1 of this year / next year
//! - [`this_month`] / [`next_month`]: day 1 of this month / next month
//! - [`next_weekday`]: the weekday on or after today
//! - [`previous_weekday`]: the weekday strictly before today, within a week
//! - [`next_nth_weekday`]: the Nth weekday of this month, counted from the 1st
//! - [`next_last_weekday`]: the final weekday of this month

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::rule::Ordinal;

// ── Rollover policy ─────────────────────────────────────────────────────────

/// What [`nth_weekday_of_month`] does when the Nth weekday of the current
/// month is already behind today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NthRollover {
    /// Move to the same Nth weekday of the following month.
    #[default]
    NextMonth,
    /// Return this month's date even though it is in the past.
    Preserve,
}

// ── Year and month boundaries ───────────────────────────────────────────────

/// January 1 of `today`'s year.
pub fn this_year(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.ordinal0() as i64)
}

/// January 1 of the year after `today`'s year.
pub fn next_year(today: NaiveDate) -> NaiveDate {
    this_year(today) + Months::new(12)
}

/// Day 1 of `today`'s month.
pub fn this_month(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.day0() as i64)
}

/// Day 1 of the month after `today`'s month. December rolls into January.
pub fn next_month(today: NaiveDate) -> NaiveDate {
    this_month(today) + Months::new(1)
}

/// The last day of `today`'s month.
fn month_end(today: NaiveDate) -> NaiveDate {
    next_month(today) - Duration::days(1)
}

// ── Weekday arithmetic ──────────────────────────────────────────────────────

/// Days forward from `from` to the next `to`, in `0..7`.
fn days_until(from: Weekday, to: Weekday) -> i64 {
    (to.num_days_from_sunday() as i64 - from.num_days_from_sunday() as i64).rem_euclid(7)
}

/// The next occurrence of `weekday` on or after `today`.
///
/// If today already is `weekday`, today is returned.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use date_catalog::weekday::next_weekday;
///
/// // Thursday, December 8, 2016
/// let today = NaiveDate::from_ymd_opt(2016, 12, 8).unwrap();
/// assert_eq!(next_weekday(Weekday::Wed, today), NaiveDate::from_ymd_opt(2016, 12, 14).unwrap());
/// assert_eq!(next_weekday(Weekday::Thu, today), today);
/// ```
pub fn next_weekday(weekday: Weekday, today: NaiveDate) -> NaiveDate {
    today + Duration::days(days_until(today.weekday(), weekday))
}

/// The occurrence of `weekday` one week before [`next_weekday`].
///
/// Always strictly before today: when today is `weekday`, this is the same
/// weekday of the previous week.
pub fn previous_weekday(weekday: Weekday, today: NaiveDate) -> NaiveDate {
    next_weekday(weekday, today) - Duration::weeks(1)
}

/// The Nth `weekday` of `today`'s month, where `weeks_to_add` 0 is the first
/// occurrence and 4 the fifth.
///
/// The date is counted forward from the first occurrence in whole weeks, so a
/// fifth occurrence in a month that only has four lands in the next month.
///
/// # Errors
///
/// Returns [`CatalogError::Range`] if `weeks_to_add` is greater than 4.
pub fn next_nth_weekday(
    weekday: Weekday,
    weeks_to_add: u32,
    today: NaiveDate,
    rollover: NthRollover,
) -> Result<NaiveDate> {
    let ordinal = Ordinal::from_weeks_to_add(weeks_to_add)
        .ok_or(CatalogError::Range { weeks_to_add })?;
    Ok(nth_weekday_of_month(weekday, ordinal, today, rollover))
}

/// Infallible form of [`next_nth_weekday`] for an already-validated ordinal.
pub fn nth_weekday_of_month(
    weekday: Weekday,
    ordinal: Ordinal,
    today: NaiveDate,
    rollover: NthRollover,
) -> NaiveDate {
    let candidate = nth_from_month_start(weekday, ordinal, this_month(today));

    if candidate < today && rollover == NthRollover::NextMonth {
        let rolled = nth_from_month_start(weekday, ordinal, next_month(today));
        tracing::trace!(
            %today,
            ?weekday,
            ?ordinal,
            %candidate,
            %rolled,
            "nth weekday already passed, rolling into next month"
        );
        return rolled;
    }

    candidate
}

fn nth_from_month_start(weekday: Weekday, ordinal: Ordinal, month_start: NaiveDate) -> NaiveDate {
    next_weekday(weekday, month_start) + Duration::weeks(ordinal.weeks_to_add() as i64)
}

/// The last occurrence of `weekday` in `today`'s month.
///
/// May be before today; the month is never advanced.
pub fn next_last_weekday(weekday: Weekday, today: NaiveDate) -> NaiveDate {
    let end = month_end(today);
    end - Duration::days(days_until(weekday, end.weekday()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
