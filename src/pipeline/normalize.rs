//! Spanish date fragment normalization.
//!
//! Listing pages show dates either as a long form without a year
//! ("Miércoles 06 de agosto") or as an abbreviated month with an explicit year
//! ("19 sep. 2025"). Both are turned into `DD-MM-YYYY`.
//!
//! Known limitation: the long form carries no year, so the year is taken from
//! the local clock when the fragment is normalized. A show announced in
//! December for "15 de enero" is dated to the current year, not the next one.
//! This matches how the listings have always been scraped and is left as is.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

// Input is lowercased before matching, so the classes only need lowercase letters.
static LONG_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2})\s+de\s+([a-zá]+)").expect("long form date regex"));
static SHORT_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s+([a-z]{3})\.?\s+([0-9]{4})").expect("short form date regex")
});

/// Month number for a full lowercase Spanish month name
fn long_month_number(name: &str) -> Option<u32> {
    let month = match name {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" | "setiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

/// Month number for a three-letter lowercase Spanish abbreviation
fn short_month_number(abbr: &str) -> Option<u32> {
    let month = match abbr {
        "ene" => 1,
        "feb" => 2,
        "mar" => 3,
        "abr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "ago" => 8,
        "sep" | "set" => 9,
        "oct" => 10,
        "nov" => 11,
        "dic" => 12,
        _ => return None,
    };
    Some(month)
}

/// A date in `DD-MM-YYYY` form.
///
/// Components are kept exactly as read: no calendar validation is done, so
/// "31 de febrero" still yields `31-02-YYYY`. Use [`NormalizedDate::to_naive_date`]
/// when a real calendar date is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizedDate {
    day: u32,
    month: u32,
    year: i32,
}

impl NormalizedDate {
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

impl Serialize for NormalizedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalizes scraped Spanish date fragments.
///
/// Holds the year used for long-form dates so callers (and tests) can pin it.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer {
    current_year: i32,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DateNormalizer {
    /// Uses the local wall-clock year at construction time.
    pub fn new() -> Self {
        Self::with_year(Local::now().year())
    }

    pub fn with_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Returns `None` when the fragment is absent, matches neither form, or
    /// names a month that is not in the tables. The long form is always tried
    /// first; only the first match of each pattern is considered.
    pub fn normalize(&self, raw: Option<&str>) -> Option<NormalizedDate> {
        let raw = raw?.trim().to_lowercase();

        if let Some(date) = self.match_long_form(&raw) {
            return Some(date);
        }
        Self::match_short_form(&raw)
    }

    fn match_long_form(&self, raw: &str) -> Option<NormalizedDate> {
        let caps = LONG_FORM.captures(raw)?;
        let month = long_month_number(&caps[2])?;
        let day = caps[1].parse().ok()?;
        Some(NormalizedDate {
            day,
            month,
            year: self.current_year,
        })
    }

    fn match_short_form(raw: &str) -> Option<NormalizedDate> {
        let caps = SHORT_FORM.captures(raw)?;
        let month = short_month_number(&caps[2])?;
        let day = caps[1].parse().ok()?;
        let year = caps[3].parse().ok()?;
        Some(NormalizedDate { day, month, year })
    }
}

/// Normalize with the current local year. See [`DateNormalizer::normalize`].
pub fn normalize_date(raw: Option<&str>) -> Option<NormalizedDate> {
    DateNormalizer::new().normalize(raw)
}
