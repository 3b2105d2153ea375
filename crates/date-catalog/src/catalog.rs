//! The precomputed catalog of named dates.
//!
//! A [`DateCatalog`] reads its clock once and evaluates every [`Rule`] against
//! that single snapshot. It is immutable afterwards: build a fresh one whenever
//! current values are needed.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::clock::{Clock, SystemClock};
use crate::error::{CatalogError, Result};
use crate::rule::Rule;
use crate::weekday::NthRollover;

/// Options for [`DateCatalog::with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogOptions {
    /// What `Next{First..Fifth}{W}` entries do once their date has passed this month.
    pub nth_rollover: NthRollover,
}

/// Named dates computed from one snapshot of "now".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_catalog::{DateCatalog, FixedClock};
///
/// let now = NaiveDate::from_ymd_opt(2016, 12, 8)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let catalog = DateCatalog::from_clock(&FixedClock(now));
///
/// assert_eq!(catalog.get("NextYear").unwrap(), NaiveDate::from_ymd_opt(2017, 1, 1).unwrap());
/// assert!(catalog.get("DoesNotExist").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCatalog {
    now: NaiveDateTime,
    dates: HashMap<Rule, NaiveDate>,
}

impl DateCatalog {
    /// Build a catalog from the system clock with default options.
    pub fn new() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Build a catalog from an injected clock with default options.
    pub fn from_clock<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::with_options(clock, &CatalogOptions::default())
    }

    /// Build a catalog from an injected clock.
    ///
    /// The clock is read exactly once.
    pub fn with_options<C: Clock + ?Sized>(clock: &C, options: &CatalogOptions) -> Self {
        Self::at(clock.now(), options)
    }

    /// Build a catalog for a known instant.
    pub fn at(now: NaiveDateTime, options: &CatalogOptions) -> Self {
        let dates: HashMap<Rule, NaiveDate> = Rule::all()
            .map(|rule| (rule, rule.evaluate(now, options)))
            .collect();

        tracing::debug!(
            %now,
            entries = dates.len(),
            rollover = ?options.nth_rollover,
            "built date catalog"
        );

        Self { now, dates }
    }

    /// The instant every entry was computed from.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Look up a date by its canonical key, e.g. `"NextThirdWednesday"`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `name` is not one of the catalog keys.
    pub fn get(&self, name: &str) -> Result<NaiveDate> {
        let rule = name.parse::<Rule>().inspect_err(|_| {
            tracing::debug!(key = name, "unknown catalog key");
        })?;
        self.dates
            .get(&rule)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Like [`DateCatalog::get`], as a datetime at 00:00:00.
    pub fn get_midnight(&self, name: &str) -> Result<NaiveDateTime> {
        self.get(name).map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Typed lookup; every [`Rule`] has an entry.
    pub fn get_rule(&self, rule: Rule) -> Option<NaiveDate> {
        self.dates.get(&rule).copied()
    }

    /// Whether `name` is a catalog key.
    pub fn contains(&self, name: &str) -> bool {
        name.parse::<Rule>().is_ok_and(|rule| self.dates.contains_key(&rule))
    }

    /// All canonical keys, in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(rule, _)| rule.to_string())
    }

    /// All entries, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, NaiveDate)> + '_ {
        Rule::all().filter_map(|rule| self.dates.get(&rule).map(|date| (rule, *date)))
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl Default for DateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for DateCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (rule, date) in self.iter() {
            map.serialize_entry(&rule, &date)?;
        }
        map.end()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
