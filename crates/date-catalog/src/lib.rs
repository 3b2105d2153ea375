//! # date-catalog
//!
//! A fixed catalog of named calendar dates relative to today.
//!
//! Hosts that let a user pick a label such as `"NextThirdWednesday"` or
//! `"ThisMonth"` resolve it to a concrete date here instead of writing date
//! arithmetic themselves. The catalog holds exactly 60 keys, all computed from
//! one reading of the clock.
//!
//! ## Modules
//!
//! - [`catalog`]: [`DateCatalog`], the precomputed key to date mapping
//! - [`rule`]: the enumerable set of rules and their canonical names
//! - [`weekday`]: year, month and weekday arithmetic behind every rule
//! - [`clock`]: injectable sources of "now"
//! - [`error`]: error types

pub mod catalog;
pub mod clock;
pub mod error;
pub mod rule;
pub mod weekday;

pub use catalog::{CatalogOptions, DateCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CatalogError;
pub use rule::{Ordinal, Rule, RULE_COUNT, WEEKDAYS};
pub use weekday::{
    next_last_weekday, next_month, next_nth_weekday, next_weekday, next_year,
    nth_weekday_of_month, previous_weekday, this_month, this_year, NthRollover,
};
