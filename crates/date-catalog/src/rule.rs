//! The fixed set of named rules.
//!
//! Rules are data: [`Rule::all`] enumerates the 60 keys by crossing every
//! weekday with every weekday-relative family, so no key is written out by
//! hand. [`Rule`]'s `Display` renders the canonical key (`"NextThirdWednesday"`)
//! and `FromStr` parses it back.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

use crate::catalog::CatalogOptions;
use crate::error::CatalogError;
use crate::weekday;

/// Weekdays in catalog order, Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Total number of catalog keys: 4 scalar rules plus 8 weekday families
/// (Next, Previous, First through Fifth, Last) of 7 weekdays each.
pub const RULE_COUNT: usize = 4 + (3 + Ordinal::ALL.len()) * WEEKDAYS.len();

// ── Ordinal ─────────────────────────────────────────────────────────────────

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Ordinal {
    pub const ALL: [Ordinal; 5] = [
        Ordinal::First,
        Ordinal::Second,
        Ordinal::Third,
        Ordinal::Fourth,
        Ordinal::Fifth,
    ];

    /// Whole weeks past the first occurrence: 0 for `First`, 4 for `Fifth`.
    pub fn weeks_to_add(self) -> u32 {
        match self {
            Ordinal::First => 0,
            Ordinal::Second => 1,
            Ordinal::Third => 2,
            Ordinal::Fourth => 3,
            Ordinal::Fifth => 4,
        }
    }

    /// Inverse of [`Ordinal::weeks_to_add`]; `None` above 4.
    pub fn from_weeks_to_add(weeks: u32) -> Option<Ordinal> {
        Ordinal::ALL.get(weeks as usize).copied()
    }

    fn name(self) -> &'static str {
        match self {
            Ordinal::First => "First",
            Ordinal::Second => "Second",
            Ordinal::Third => "Third",
            Ordinal::Fourth => "Fourth",
            Ordinal::Fifth => "Fifth",
        }
    }
}

// ── Rule ────────────────────────────────────────────────────────────────────

/// One named entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `ThisYear`: January 1 of the current year.
    ThisYear,
    /// `NextYear`: January 1 of the following year.
    NextYear,
    /// `ThisMonth`: day 1 of the current month.
    ThisMonth,
    /// `NextMonth`: day 1 of the following month.
    NextMonth,
    /// `Next{W}`: the weekday on or after today.
    Next(Weekday),
    /// `Previous{W}`: the weekday within the last seven days, never today.
    Previous(Weekday),
    /// `Next{First..Fifth}{W}`: the Nth weekday of the month.
    Nth(Ordinal, Weekday),
    /// `NextLast{W}`: the final weekday of the current month.
    Last(Weekday),
}

impl Rule {
    /// Every rule in canonical order: the scalar rules, then one block of
    /// seven weekdays per family.
    pub fn all() -> impl Iterator<Item = Rule> {
        let scalars = [Rule::ThisYear, Rule::NextYear, Rule::ThisMonth, Rule::NextMonth];
        let families: [fn(Weekday) -> Rule; 8] = [
            Rule::Next,
            Rule::Previous,
            |w| Rule::Nth(Ordinal::First, w),
            |w| Rule::Nth(Ordinal::Second, w),
            |w| Rule::Nth(Ordinal::Third, w),
            |w| Rule::Nth(Ordinal::Fourth, w),
            |w| Rule::Nth(Ordinal::Fifth, w),
            Rule::Last,
        ];

        scalars.into_iter().chain(
            families
                .into_iter()
                .flat_map(|family| WEEKDAYS.into_iter().map(family)),
        )
    }

    /// Evaluate this rule against `now`.
    ///
    /// Only the date part of `now` matters; the result is a date at midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use date_catalog::{CatalogOptions, Ordinal, Rule};
    ///
    /// let now = NaiveDate::from_ymd_opt(2016, 12, 8)
    ///     .unwrap()
    ///     .and_hms_opt(9, 30, 0)
    ///     .unwrap();
    /// let rule = Rule::Nth(Ordinal::Third, Weekday::Wed);
    /// assert_eq!(
    ///     rule.evaluate(now, &CatalogOptions::default()),
    ///     NaiveDate::from_ymd_opt(2016, 12, 21).unwrap()
    /// );
    /// ```
    pub fn evaluate(self, now: NaiveDateTime, options: &CatalogOptions) -> NaiveDate {
        let today = now.date();
        match self {
            Rule::ThisYear => weekday::this_year(today),
            Rule::NextYear => weekday::next_year(today),
            Rule::ThisMonth => weekday::this_month(today),
            Rule::NextMonth => weekday::next_month(today),
            Rule::Next(w) => weekday::next_weekday(w, today),
            Rule::Previous(w) => weekday::previous_weekday(w, today),
            Rule::Nth(ordinal, w) => {
                weekday::nth_weekday_of_month(w, ordinal, today, options.nth_rollover)
            }
            Rule::Last(w) => weekday::next_last_weekday(w, today),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ThisYear => f.write_str("ThisYear"),
            Rule::NextYear => f.write_str("NextYear"),
            Rule::ThisMonth => f.write_str("ThisMonth"),
            Rule::NextMonth => f.write_str("NextMonth"),
            Rule::Next(w) => write!(f, "Next{}", weekday_name(*w)),
            Rule::Previous(w) => write!(f, "Previous{}", weekday_name(*w)),
            Rule::Nth(ordinal, w) => write!(f, "Next{}{}", ordinal.name(), weekday_name(*w)),
            Rule::Last(w) => write!(f, "NextLast{}", weekday_name(*w)),
        }
    }
}

impl FromStr for Rule {
    type Err = CatalogError;

    /// Parse a canonical key. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || CatalogError::NotFound(s.to_string());

        match s {
            "ThisYear" => return Ok(Rule::ThisYear),
            "NextYear" => return Ok(Rule::NextYear),
            "ThisMonth" => return Ok(Rule::ThisMonth),
            "NextMonth" => return Ok(Rule::NextMonth),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("Previous") {
            return parse_weekday(rest).map(Rule::Previous).ok_or_else(not_found);
        }

        let rest = s.strip_prefix("Next").ok_or_else(not_found)?;
        if let Some(w) = parse_weekday(rest) {
            return Ok(Rule::Next(w));
        }
        if let Some(w) = rest.strip_prefix("Last").and_then(parse_weekday) {
            return Ok(Rule::Last(w));
        }
        Ordinal::ALL
            .into_iter()
            .find_map(|ordinal| {
                rest.strip_prefix(ordinal.name())
                    .and_then(parse_weekday)
                    .map(|w| Rule::Nth(ordinal, w))
            })
            .ok_or_else(not_found)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── Weekday names ───────────────────────────────────────────────────────────

fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    WEEKDAYS.into_iter().find(|w| weekday_name(*w) == s)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_has_60_unique_rules() {
        let rules: Vec<Rule> = Rule::all().collect();
        assert_eq!(rules.len(), RULE_COUNT);
        // 4 scalar rules + 8 families x 7 weekdays
        assert_eq!(RULE_COUNT, 60);

        let keys: HashSet<String> = rules.iter().map(Rule::to_string).collect();
        assert_eq!(keys.len(), RULE_COUNT);
    }

    #[test]
    fn test_all_starts_with_scalar_rules() {
        let first: Vec<String> = Rule::all().take(5).map(|r| r.to_string()).collect();
        assert_eq!(
            first,
            ["ThisYear", "NextYear", "ThisMonth", "NextMonth", "NextSunday"]
        );
    }

    #[test]
    fn test_all_contains_every_canonical_key() {
        let keys: HashSet<String> = Rule::all().map(|r| r.to_string()).collect();
        for day in [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ] {
            for prefix in [
                "Next",
                "Previous",
                "NextFirst",
                "NextSecond",
                "NextThird",
                "NextFourth",
                "NextFifth",
                "NextLast",
            ] {
                let key = format!("{prefix}{day}");
                assert!(keys.contains(&key), "missing {key}");
            }
        }
    }

    #[test]
    fn test_display_and_parse_agree_for_every_rule() {
        for rule in Rule::all() {
            assert_eq!(rule.to_string().parse::<Rule>(), Ok(rule));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Rule::Next(Weekday::Wed).to_string(), "NextWednesday");
        assert_eq!(Rule::Previous(Weekday::Sun).to_string(), "PreviousSunday");
        assert_eq!(
            Rule::Nth(Ordinal::Third, Weekday::Thu).to_string(),
            "NextThirdThursday"
        );
        assert_eq!(Rule::Last(Weekday::Fri).to_string(), "NextLastFriday");
    }

    #[test]
    fn test_parse_unknown_key_is_not_found() {
        for key in [
            "DoesNotExist",
            "",
            "Next",
            "NextLast",
            "nextwednesday",
            "NextSixthWednesday",
            "PreviousLastWednesday",
            "LastYear",
            "NextWednesdayX",
        ] {
            assert_eq!(
                key.parse::<Rule>(),
                Err(CatalogError::NotFound(key.to_string())),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_ordinal_weeks_round_trip() {
        for ordinal in Ordinal::ALL {
            assert_eq!(Ordinal::from_weeks_to_add(ordinal.weeks_to_add()), Some(ordinal));
        }
        assert_eq!(Ordinal::from_weeks_to_add(5), None);
    }

    #[test]
    fn test_rule_serializes_as_key() {
        let json = serde_json::to_string(&Rule::Nth(Ordinal::Fifth, Weekday::Sat)).unwrap();
        assert_eq!(json, "\"NextFifthSaturday\"");
    }
}
