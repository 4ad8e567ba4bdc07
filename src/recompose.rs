//! Recomposition of civil fields into an instant.
//!
//! Fields are never validated here. Out-of-range components carry into the
//! next larger unit (`2023-02-30` becomes `2023-03-02`, `24:00:00` becomes
//! midnight of the following day), and the resulting wall clock is resolved
//! against the zone by jiff.

use jiff::{SignedDuration, Span, Zoned, civil, tz::TimeZone};

use crate::consts::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MEAN_MONTH, SECONDS_PER_MINUTE};
use crate::{Date, Error, Time};

/// Fields are added as offsets from this point, so a year of 0 stays in range.
const ORIGIN: civil::DateTime = civil::date(0, 1, 1).at(0, 0, 0, 0);

/// Builds the normalized civil datetime for `date` at `time`.
pub(crate) fn normalize(date: Date, time: Time) -> Result<civil::DateTime, Error> {
    // Months are applied to the first of a month so no day clamping occurs.
    let dt = ORIGIN
        .checked_add(Span::new().try_months(month_index(date))?)?
        .checked_add(Span::new().try_days(i64::from(date.day) - 1)?)?;
    Ok(dt.checked_add(SignedDuration::new(seconds_of_day(time), time.nanosecond))?)
}

/// Seconds from 0000-01-01 to `date` at `time`, counting every month at the
/// mean Gregorian length.
///
/// The result is off by a few days at most. That is enough to tell which
/// side of jiff's range a value that fails [`normalize`] lies on.
pub(crate) fn approximate_seconds(date: Date, time: Time) -> i64 {
    month_index(date) * SECONDS_PER_MEAN_MONTH
        + (i64::from(date.day) - 1) * SECONDS_PER_DAY
        + seconds_of_day(time)
}

/// Months from 0000-01 to the first of `date`'s month.
fn month_index(date: Date) -> i64 {
    i64::from(date.year) * 12 + i64::from(date.month) - 1
}

fn seconds_of_day(time: Time) -> i64 {
    i64::from(time.hour) * SECONDS_PER_HOUR
        + i64::from(time.minute) * SECONDS_PER_MINUTE
        + i64::from(time.second)
}

/// Resolves `date` at `time` in `tz`.
///
/// A wall clock inside a gap uses the offset in force after the transition,
/// and one inside a fold picks its first occurrence. This is jiff's
/// "earlier" disambiguation.
pub(crate) fn to_zoned(date: Date, time: Time, tz: TimeZone) -> Result<Zoned, Error> {
    let dt = normalize(date, time)?;
    Ok(tz.into_ambiguous_zoned(dt).earlier()?)
}
