/// Maximum valid month (December)
pub const MAX_MONTH: i32 = 12;

/// First day of month, also the day a rollover lands on
pub const MIN_DAY: i32 = 1;

/// Smallest valid year
pub const MIN_YEAR: i32 = 0;

/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// Day count used for any month number outside the table
pub(crate) const FALLBACK_MONTH_DAYS: i32 = 31;

/// Days in each month (index 0 is unused, months are 1-indexed).
/// February is fixed at 28 days; there is no leap-year adjustment.
pub const DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (always)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month used by `Date::default()`
pub const DEFAULT_MONTH: i32 = 1;
/// Day used by `Date::default()`
pub const DEFAULT_DAY: i32 = 1;
/// Year used by `Date::default()`
pub const DEFAULT_YEAR: i32 = 2000;

/// Separator between month, day and year in `month/day/year` input
pub const DATE_SEPARATOR: char = '/';
