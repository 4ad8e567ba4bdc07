/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: u8 = b'-';
/// Time component separator (`HH:MM:SS`)
pub const TIME_SEPARATOR: u8 = b':';
/// Decimal point introducing fractional seconds
pub const FRACTION_SEPARATOR: u8 = b'.';
/// Separator written between the date and time of a `DateTime`
pub const DATETIME_SEPARATOR: u8 = b'T';
/// Lower-case separator also accepted when parsing a `DateTime`
pub const DATETIME_SEPARATOR_LOWER: u8 = b't';

/// Length of the canonical `YYYY-MM-DD` form
pub const DATE_LEN: usize = 10;
/// Length of `HH:MM:SS` without a fraction
pub const TIME_LEN: usize = 8;
/// Maximum number of fractional second digits
pub const MAX_FRACTION_DIGITS: usize = 9;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
/// Unix time advances by exactly this many seconds per day
pub const SECONDS_PER_DAY: i64 = 86_400;
/// A Gregorian year of 365.2425 days split into twelve equal months
pub(crate) const SECONDS_PER_MEAN_MONTH: i64 = 2_629_746;

/// Reference date used to check a `Time` for validity. Any non-degenerate
/// date away from the epoch and the calendar bounds works.
pub(crate) const TIME_CHECK_YEAR: i32 = 2;
pub(crate) const TIME_CHECK_MONTH: i8 = 2;
pub(crate) const TIME_CHECK_DAY: i8 = 2;
