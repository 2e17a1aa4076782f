mod calendar;
mod consts;
mod format;
mod prelude;

pub use calendar::{days_in_month, is_valid_date, month_name, validate};
pub use consts::*;
pub use format::DateFormat;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A calendar date with a display format attached.
///
/// February always has 28 days. Equality, ordering and hashing only look at
/// `(year, month, day)`; the display format is ignored.
///
/// ```
/// use plain_date::{Date, DateFormat};
///
/// let mut date = Date::default();
/// assert!(date.set(3, 4, 2023));
/// assert_eq!(date.show(), "3/4/2023");
///
/// date.set_format(DateFormat::Long);
/// assert_eq!(date.show(), "March 4, 2023");
///
/// date.increment(28);
/// assert_eq!(date.show(), "April 1, 2023");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "DateRepr", into = "DateRepr")]
pub struct Date {
    month: i32,
    day: i32,
    year: i32,
    format: DateFormat,
}

/// Error type for rejected date components and malformed `month/day/year` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i32),
    #[error("Invalid day {day} for month {month}")]
    InvalidDay { month: i32, day: i32, year: i32 },
    #[error("Invalid year: {0} (must be at least {min})", min = MIN_YEAR)]
    InvalidYear(i32),
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl Date {
    /// Creates a date from raw components without any validation.
    ///
    /// Intended for trusted literals. Nothing stops this from building an
    /// out-of-range date such as month 13; use [`Date::try_new`] or
    /// [`Date::set`] for values that come from outside the program.
    pub const fn new(month: i32, day: i32, year: i32) -> Self {
        Self {
            month,
            day,
            year,
            format: DateFormat::Standard,
        }
    }

    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns the first invalid component, see [`validate`].
    pub fn try_new(month: i32, day: i32, year: i32) -> Result<Self, DateError> {
        validate(month, day, year)?;
        Ok(Self::new(month, day, year))
    }

    /// Returns a copy of this date that renders with `format`.
    #[must_use]
    pub const fn with_format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn format(&self) -> DateFormat {
        self.format
    }

    /// Returns `(month, day, year)`
    pub const fn to_tuple(&self) -> (i32, i32, i32) {
        (self.month, self.day, self.year)
    }

    /// Returns true if the current components satisfy every date invariant.
    /// Only dates built through [`Date::new`] can fail this.
    pub fn is_valid(&self) -> bool {
        is_valid_date(self.month, self.day, self.year)
    }

    /// Replaces month, day and year together, or not at all.
    ///
    /// # Errors
    /// Returns the first invalid component; the date is left untouched.
    pub fn try_set(&mut self, month: i32, day: i32, year: i32) -> Result<(), DateError> {
        if let Err(err) = validate(month, day, year) {
            #[cfg(feature = "log")]
            log::debug!("Rejected date {month}/{day}/{year}: {err}");
            return Err(err);
        }
        self.month = month;
        self.day = day;
        self.year = year;
        Ok(())
    }

    /// Replaces month, day and year together if they form a valid date.
    /// Returns false and leaves the date untouched otherwise.
    pub fn set(&mut self, month: i32, day: i32, year: i32) -> bool {
        self.try_set(month, day, year).is_ok()
    }

    pub const fn set_format(&mut self, format: DateFormat) {
        self.format = format;
    }

    /// Renders the date using its current format.
    pub fn show(&self) -> String {
        self.to_string()
    }

    /// Moves the date forward by one day.
    pub fn increment_day(&mut self) {
        self.increment(1);
    }

    /// Moves the date forward by `num_days` days.
    ///
    /// Fills the current month, then rolls over to the first of the next
    /// month (and the next year after December) until the days are used up,
    /// so the cost grows with the number of months crossed.
    ///
    /// A `num_days` of zero or less leaves the date unchanged. The year saturates at
    /// `i32::MAX`, so rolling past December of that year lands on January 1st
    /// of the same year, which sorts before the starting date.
    ///
    /// Dates built through [`Date::new`] with out-of-range components run
    /// through the same loop: a day past the end of its month rolls over on
    /// the first step, and a month above 12 keeps counting up with 31 days.
    pub fn increment(&mut self, num_days: i32) {
        let mut remaining = i64::from(num_days);
        while remaining > 0 {
            let dim = i64::from(days_in_month(self.month));
            let day = i64::from(self.day);
            if remaining <= dim - day {
                // lands between the current day and the month end, fits in i32
                self.day = i32::try_from(day + remaining).unwrap_or(i32::MAX);
                remaining = 0;
            } else {
                remaining -= dim - day + 1;
                self.day = MIN_DAY;
                if self.month == DECEMBER {
                    self.month = JANUARY;
                    self.year = self.year.saturating_add(1);
                } else {
                    self.month = self.month.saturating_add(1);
                }
            }
        }
    }

    fn parse_component(s: &str) -> Result<i32, DateError> {
        s.parse::<i32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    #[inline]
    const fn sort_key(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(DEFAULT_MONTH, DEFAULT_DAY, DEFAULT_YEAR)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            DateFormat::Standard => write!(f, "{}/{}/{}", self.month, self.day, self.year),
            DateFormat::TwoDigit => {
                write!(f, "{:02}/{:02}/{:02}", self.month, self.day, self.year)
            },
            DateFormat::Long => {
                write!(f, "{} {}, {}", month_name(self.month), self.day, self.year)
            },
        }
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Date {}

impl Hash for Date {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses `month/day/year`, e.g. `3/4/2023` or `03/04/2023`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "expected month{DATE_SEPARATOR}day{DATE_SEPARATOR}year, found {} component(s)",
                parts.len()
            )));
        }

        let month = Self::parse_component(parts[0])?;
        let day = Self::parse_component(parts[1])?;
        let year = Self::parse_component(parts[2])?;

        Self::try_new(month, day, year)
    }
}

impl TryFrom<(i32, i32, i32)> for Date {
    type Error = DateError;

    /// Builds a validated date from `(month, day, year)`.
    fn try_from((month, day, year): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::try_new(month, day, year)
    }
}

/// Wire shape of a `Date`; deserialization goes through validation.
#[derive(Serialize, Deserialize)]
struct DateRepr {
    month: i32,
    day: i32,
    year: i32,
    #[serde(default)]
    format: DateFormat,
}

impl TryFrom<DateRepr> for Date {
    type Error = DateError;

    fn try_from(repr: DateRepr) -> Result<Self, Self::Error> {
        Ok(Self::try_new(repr.month, repr.day, repr.year)?.with_format(repr.format))
    }
}

impl From<Date> for DateRepr {
    fn from(date: Date) -> Self {
        Self {
            month: date.month,
            day: date.day,
            year: date.year,
            format: date.format,
        }
    }
}
