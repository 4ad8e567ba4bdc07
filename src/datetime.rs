use std::cmp::Ordering;
use std::str::FromStr;

use jiff::{Timestamp, Zoned, civil, tz::TimeZone};

use crate::consts::{DATE_LEN, DATETIME_SEPARATOR, DATETIME_SEPARATOR_LOWER};
use crate::sql::{Scanner, SqlValue, Valuer};
use crate::{Date, Error, Time, prelude::*, recompose, text};

/// A date and a time of day, without a time zone.
///
/// The date and time are kept as separate fields rather than flattened so
/// that date-only operations such as [`Date::add_days`] stay on `Date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{date}T{time}")]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    const KIND: &'static str = "datetime";

    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Returns the civil datetime of `zdt` in its own time zone.
    pub fn of(zdt: &Zoned) -> Self {
        Self {
            date: Date::of(zdt),
            time: Time::of(zdt),
        }
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[.FFFFFFFFF]`, where the `T` may also be a
    /// lower-case `t`. The fraction follows the rules of [`Time::parse`].
    ///
    /// # Errors
    /// Returns `Error::Format` carrying `s` if it has neither form.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_with(s, DATETIME_SEPARATOR)
            .or_else(|| Self::parse_with(s, DATETIME_SEPARATOR_LOWER))
            .ok_or_else(|| Error::format(Self::KIND, s))
    }

    fn parse_with(s: &str, separator: u8) -> Option<Self> {
        let (date, rest) = s.split_at_checked(DATE_LEN)?;
        let (&sep, time) = rest.as_bytes().split_first()?;
        if sep != separator {
            return None;
        }
        Some(Self {
            date: Date::parse_fields(date)?,
            time: Time::parse_fields(std::str::from_utf8(time).ok()?)?,
        })
    }

    fn parse_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::parse(text::utf8(Self::KIND, bytes)?)
    }

    /// Reports whether both the date and the time are valid.
    pub fn is_valid(&self) -> bool {
        self.date.is_valid() && self.time.is_valid()
    }

    /// Returns the instant this datetime names in `tz`.
    ///
    /// Fields carry over like [`Date::to_zoned`], and a wall clock that is
    /// missing or repeated in `tz` resolves the same way. In
    /// `America/Indiana/Vincennes`, 1955-05-01T00:30 yields 23:30 on
    /// April 30.
    ///
    /// # Errors
    /// Returns `Error::Range` when the datetime is outside the supported range.
    pub fn to_zoned(self, tz: TimeZone) -> Result<Zoned, Error> {
        recompose::to_zoned(self.date, self.time, tz)
    }

    fn placement(&self) -> Placement {
        match self.to_zoned(TimeZone::UTC) {
            Ok(zdt) => Placement::Within(zdt.timestamp()),
            Err(err) => {
                tracing::trace!(%err, datetime = %self, "datetime outside the supported range");
                if recompose::approximate_seconds(self.date, self.time) < 0 {
                    Placement::Below
                } else {
                    Placement::Above
                }
            }
        }
    }

    pub fn before(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }

    /// Compares the UTC instants of both datetimes.
    ///
    /// Overflowing fields are normalized first, so `2024-01-32T00:00:00`
    /// equals `2024-02-01T00:00:00`. A value too far from the epoch to have
    /// an instant sorts before or after every value that has one, and such
    /// values are compared field by field among themselves.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.placement(), other.placement()) {
            (Placement::Below, Placement::Below) | (Placement::Above, Placement::Above) => {
                (self.date, self.time).cmp(&(other.date, other.time))
            }
            (a, b) => a.cmp(&b),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time.is_zero()
    }
}

/// Where a datetime lies relative to the instants jiff can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Placement {
    Below,
    Within(Timestamp),
    Above,
}

impl From<civil::DateTime> for DateTime {
    fn from(dt: civil::DateTime) -> Self {
        Self {
            date: dt.date().into(),
            time: dt.time().into(),
        }
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Scanner for DateTime {
    /// An absent by-reference value leaves the datetime unchanged.
    fn scan(&mut self, value: SqlValue<'_>) -> Result<(), Error> {
        *self = match value {
            SqlValue::Timestamp(zdt) | SqlValue::TimestampRef(Some(zdt)) => Self::of(zdt),
            SqlValue::DateTime(dt) => dt.into(),
            SqlValue::Text(s) | SqlValue::TextRef(Some(s)) => Self::parse(s)?,
            SqlValue::Bytes(b) | SqlValue::BytesRef(Some(b)) => Self::parse_bytes(b)?,
            SqlValue::TimestampRef(None) | SqlValue::TextRef(None) | SqlValue::BytesRef(None) => {
                return Ok(());
            }
            other => {
                tracing::debug!(kind = other.kind(), value = ?other, "unsupported scan input");
                return Err(Error::type_mismatch("DateTime", other.kind()));
            }
        };
        Ok(())
    }
}

impl Valuer for DateTime {
    fn value(&self) -> String {
        self.to_string()
    }
}
