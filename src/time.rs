use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use jiff::{Zoned, civil, tz::TimeZone};

use crate::consts::{
    FRACTION_SEPARATOR, MAX_FRACTION_DIGITS, TIME_CHECK_DAY, TIME_CHECK_MONTH, TIME_CHECK_YEAR,
    TIME_LEN, TIME_SEPARATOR,
};
use crate::sql::{Scanner, SqlValue, Valuer};
use crate::{Date, Error, recompose, text};

/// A time of day with nanosecond precision, without a time zone.
///
/// A `Time` does not describe a unique moment. It exists mostly to carry
/// `TIME` columns; [`DateTime`](crate::DateTime) is usually what you want.
/// As with [`Date`], fields are not checked on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    /// Hour of the day in 24-hour format, 0-23
    pub hour:       i8,
    /// Minute of the hour, 0-59
    pub minute:     i8,
    /// Second of the minute, 0-59
    pub second:     i8,
    /// Nanosecond of the second, 0-999999999
    pub nanosecond: i32,
}

impl Time {
    const KIND: &'static str = "time";

    pub const fn new(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Returns the wall-clock time of `zdt` in its own time zone, ignoring
    /// the date.
    pub fn of(zdt: &Zoned) -> Self {
        zdt.time().into()
    }

    /// Parses `HH:MM:SS`, optionally followed by a decimal point and one to
    /// nine fractional digits.
    ///
    /// # Errors
    /// Returns `Error::Format` carrying `s` if it does not have that shape.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_fields(s).ok_or_else(|| Error::format(Self::KIND, s))
    }

    pub(crate) fn parse_fields(s: &str) -> Option<Self> {
        let (clock, fraction) = s.as_bytes().split_at_checked(TIME_LEN)?;
        let &[h0, h1, TIME_SEPARATOR, m0, m1, TIME_SEPARATOR, s0, s1] = clock else {
            return None;
        };

        // Fractions shorter than nine digits are right-padded with zeros.
        let nanosecond = match fraction {
            [] => 0,
            [FRACTION_SEPARATOR, digits @ ..] if digits.len() <= MAX_FRACTION_DIGITS => {
                let scale = 10_u32.pow(u32::try_from(MAX_FRACTION_DIGITS - digits.len()).ok()?);
                i32::try_from(text::digits(digits)? * scale).ok()?
            }
            _ => return None,
        };

        Some(Self {
            hour: text::two_digits(&[h0, h1])?,
            minute: text::two_digits(&[m0, m1])?,
            second: text::two_digits(&[s0, s1])?,
            nanosecond,
        })
    }

    pub(crate) fn parse_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::parse(text::utf8(Self::KIND, bytes)?)
    }

    /// Reports whether the fields describe a time of day.
    pub fn is_valid(&self) -> bool {
        let reference = Date::new(TIME_CHECK_YEAR, TIME_CHECK_MONTH, TIME_CHECK_DAY);
        recompose::to_zoned(reference, *self, TimeZone::UTC)
            .is_ok_and(|zdt| Self::of(&zdt) == *self)
    }

    pub fn before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }

    /// Compares hour, minute, second, then nanosecond.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    pub const fn is_zero(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0 && self.nanosecond == 0
    }
}

impl From<civil::Time> for Time {
    fn from(t: civil::Time) -> Self {
        Self {
            hour:       t.hour(),
            minute:     t.minute(),
            second:     t.second(),
            nanosecond: t.subsec_nanosecond(),
        }
    }
}

/// `HH:MM:SS`, with `.fffffffff` appended only when the nanosecond is not 0.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Scanner for Time {
    /// An absent by-reference value leaves the time unchanged. A bare
    /// `NULL` is not accepted.
    fn scan(&mut self, value: SqlValue<'_>) -> Result<(), Error> {
        *self = match value {
            SqlValue::Timestamp(zdt) | SqlValue::TimestampRef(Some(zdt)) => Self::of(zdt),
            SqlValue::Text(s) | SqlValue::TextRef(Some(s)) => Self::parse(s)?,
            SqlValue::Bytes(b) | SqlValue::BytesRef(Some(b)) => Self::parse_bytes(b)?,
            SqlValue::Time(t) => t.into(),
            SqlValue::TimestampRef(None) | SqlValue::TextRef(None) | SqlValue::BytesRef(None) => {
                return Ok(());
            }
            other => return Err(Error::type_mismatch("Time", other.kind())),
        };
        Ok(())
    }
}

impl Valuer for Time {
    fn value(&self) -> String {
        self.to_string()
    }
}
