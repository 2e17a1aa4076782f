use crate::DateError;
use crate::consts::{DAYS_IN_MONTH, FALLBACK_MONTH_DAYS, MAX_MONTH, MIN_DAY, MIN_YEAR, MONTH_NAMES};

/// Number of days in `month`, from the fixed table (February is always 28).
///
/// Only meaningful for months in `1..=12`; any other value reports 31.
pub const fn days_in_month(month: i32) -> i32 {
    if month < 1 || month > MAX_MONTH {
        return FALLBACK_MONTH_DAYS;
    }
    DAYS_IN_MONTH[month as usize]
}

/// English name of `month`, or an empty string outside `1..=12`.
pub const fn month_name(month: i32) -> &'static str {
    if month < 1 || month > MAX_MONTH {
        return "";
    }
    MONTH_NAMES[month as usize]
}

/// Checks a (month, day, year) triple, reporting the first bad component.
///
/// Components are checked in the order year, month, day.
///
/// # Errors
/// Returns `DateError::InvalidYear` if `year` is negative,
/// `DateError::InvalidMonth` if `month` is outside `1..=12`, and
/// `DateError::InvalidDay` if `day` does not fit in `month`.
pub fn validate(month: i32, day: i32, year: i32) -> Result<(), DateError> {
    if year < MIN_YEAR {
        return Err(DateError::InvalidYear(year));
    }
    if month < 1 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month));
    }
    if day < MIN_DAY || day > days_in_month(month) {
        return Err(DateError::InvalidDay { month, day, year });
    }
    Ok(())
}

/// Returns true if the triple satisfies every date invariant.
///
/// ```
/// use plain_date::is_valid_date;
///
/// assert!(is_valid_date(2, 28, 2000));
/// assert!(!is_valid_date(2, 29, 2000));
/// assert!(!is_valid_date(13, 1, 2000));
/// assert!(!is_valid_date(1, 1, -1));
/// ```
pub fn is_valid_date(month: i32, day: i32, year: i32) -> bool {
    validate(month, day, year).is_ok()
}
