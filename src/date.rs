use std::cmp::Ordering;
use std::str::FromStr;

use jiff::{Span, Timestamp, Zoned, civil, tz::TimeZone};

use crate::consts::{DATE_SEPARATOR, SECONDS_PER_DAY};
use crate::sql::{Scanner, SqlValue, Valuer};
use crate::{Error, Time, prelude::*, recompose, text};

/// A calendar date (year, month, day) without a time zone.
///
/// A `Date` does not describe a unique 24-hour span. Fields are not checked
/// on construction: `Date::new(2023, 2, 30)` is a value, just not a valid
/// one. Use [`Date::is_valid`] to check.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct Date {
    /// Year (e.g. 2014)
    pub year:  i32,
    /// Month of the year, January = 1
    pub month: i8,
    /// Day of the month, starting at 1
    pub day:   i8,
}

impl Date {
    const KIND: &'static str = "date";

    pub const fn new(year: i32, month: i8, day: i8) -> Self {
        Self { year, month, day }
    }

    /// Returns the date on which `zdt` falls in its own time zone.
    pub fn of(zdt: &Zoned) -> Self {
        zdt.date().into()
    }

    /// Returns the date on which `timestamp` falls in `tz`.
    pub fn of_timestamp(timestamp: Timestamp, tz: &TimeZone) -> Self {
        tz.to_datetime(timestamp).date().into()
    }

    /// Parses the `YYYY-MM-DD` form.
    ///
    /// Only the shape is checked; `2023-02-30` parses to an invalid date.
    ///
    /// # Errors
    /// Returns `Error::Format` carrying `s` if it is not exactly
    /// `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_fields(s).ok_or_else(|| Error::format(Self::KIND, s))
    }

    pub(crate) fn parse_fields(s: &str) -> Option<Self> {
        match *s.as_bytes() {
            [
                y0,
                y1,
                y2,
                y3,
                DATE_SEPARATOR,
                m0,
                m1,
                DATE_SEPARATOR,
                d0,
                d1,
            ] => Some(Self {
                year:  i32::try_from(text::digits(&[y0, y1, y2, y3])?).ok()?,
                month: text::two_digits(&[m0, m1])?,
                day:   text::two_digits(&[d0, d1])?,
            }),
            _ => None,
        }
    }

    /// Reports whether the date exists in the calendar.
    pub fn is_valid(&self) -> bool {
        self.to_zoned(TimeZone::UTC)
            .is_ok_and(|zdt| Self::of(&zdt) == *self)
    }

    /// Returns the instant of 00:00:00 on this date in `tz`.
    ///
    /// Out-of-range fields carry over (day 32 of January is February 1).
    /// A midnight that falls in a gap or a fold of `tz` resolves the way
    /// jiff's "earlier" disambiguation does: in
    /// `America/Indiana/Vincennes`, 1955-05-01 yields 23:00 on April 30.
    ///
    /// # Errors
    /// Returns `Error::Range` when the date is outside the supported range.
    pub fn to_zoned(self, tz: TimeZone) -> Result<Zoned, Error> {
        recompose::to_zoned(self, Time::default(), tz)
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// # Errors
    /// Returns `Error::Range` when either date is outside the supported range.
    pub fn add_days(&self, days: i64) -> Result<Self, Error> {
        let zdt = self
            .to_zoned(TimeZone::UTC)?
            .checked_add(Span::new().try_days(days)?)?;
        Ok(Self::of(&zdt))
    }

    /// Returns the signed number of days from `since` to `self`, not
    /// counting the end day. This is the inverse of [`Date::add_days`].
    ///
    /// # Errors
    /// Returns `Error::Range` when either date is outside the supported range.
    pub fn days_since(&self, since: Self) -> Result<i64, Error> {
        let end = self.to_zoned(TimeZone::UTC)?.timestamp().as_second();
        let start = since.to_zoned(TimeZone::UTC)?.timestamp().as_second();
        Ok((end - start) / SECONDS_PER_DAY)
    }

    pub fn before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }

    /// Compares year, then month, then day.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Reports whether all fields hold their default value.
    pub const fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }
}

impl From<civil::Date> for Date {
    fn from(d: civil::Date) -> Self {
        Self {
            year:  i32::from(d.year()),
            month: d.month(),
            day:   d.day(),
        }
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Scanner for Date {
    /// `NULL` resets the date to its zero value.
    fn scan(&mut self, value: SqlValue<'_>) -> Result<(), Error> {
        *self = match value {
            SqlValue::Null => Self::default(),
            SqlValue::Text(s) => Self::parse(s)?,
            SqlValue::Timestamp(zdt) => Self::of(zdt),
            SqlValue::Date(d) => d.into(),
            other => return Err(Error::type_mismatch("Date", other.kind())),
        };
        Ok(())
    }
}

impl Valuer for Date {
    fn value(&self) -> String {
        self.to_string()
    }
}
