//! Civil dates, times and datetimes.
//!
//! A civil value is a calendar date or wall-clock time with no time zone
//! attached, so it does not name a unique instant. [`Date`], [`Time`] and
//! [`DateTime`] are plain field records: they can hold out-of-range fields,
//! and [`Date::is_valid`] and friends check calendar correctness on demand.
//!
//! Converting to and from instants is delegated to [`jiff`]. Out-of-range
//! fields carry into larger units during that conversion, and wall clocks
//! that are skipped or repeated by a time zone transition are resolved by
//! jiff's "earlier" disambiguation.
//!
//! ```
//! use civil_date::{Date, DateTime};
//!
//! let date: Date = "2014-08-20".parse()?;
//! assert_eq!(date.add_days(12)?.to_string(), "2014-09-01");
//!
//! let dt: DateTime = "2014-08-20t15:04:05.5".parse()?;
//! assert_eq!(dt.to_string(), "2014-08-20T15:04:05.500000000");
//! # Ok::<(), civil_date::Error>(())
//! ```

mod consts;
mod date;
mod datetime;
mod error;
mod prelude;
mod recompose;
pub mod sql;
#[cfg(feature = "sqlite")]
mod sqlite;
mod text;
mod time;

pub use consts::*;
pub use date::Date;
pub use datetime::DateTime;
pub use error::Error;
pub use sql::{Scanner, SqlValue, Valuer};
pub use time::Time;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_policies_differ() {
        // A date is reset by NULL...
        let mut date = Date::new(2014, 8, 20);
        date.scan(SqlValue::Null).unwrap();
        assert_eq!(date, Date::default());

        // ...while time and datetime keep their value for absent inputs.
        let mut time = Time::new(15, 4, 5, 0);
        time.scan(SqlValue::TextRef(None)).unwrap();
        assert_eq!(time, Time::new(15, 4, 5, 0));

        let original = DateTime::new(Date::new(2014, 8, 20), Time::new(15, 4, 5, 0));
        let mut dt = original;
        dt.scan(SqlValue::TimestampRef(None)).unwrap();
        assert_eq!(dt, original);
    }

    #[test]
    fn test_zero_and_valid_are_independent() {
        let zero = Date::default();
        assert!(zero.is_zero() && !zero.is_valid());

        let invalid = Date::new(2023, 2, 30);
        assert!(!invalid.is_zero() && !invalid.is_valid());

        let valid = Date::new(1970, 1, 1);
        assert!(!valid.is_zero() && valid.is_valid());
    }

    #[test]
    fn test_datetime_matches_parts_for_valid_values() {
        let a = DateTime::new(Date::new(2014, 8, 20), Time::new(23, 59, 59, 0));
        let b = DateTime::new(Date::new(2014, 8, 21), Time::new(0, 0, 0, 0));
        assert!(a.before(&b));
        assert!(a.date.before(&b.date));
        assert!(b.time.before(&a.time));
    }

    #[test]
    fn test_values_round_trip_through_scan() {
        let date = Date::new(2000, 2, 29);
        let time = Time::new(0, 0, 0, 1);
        let dt = DateTime::new(date, time);

        let mut d = Date::default();
        d.scan(SqlValue::Text(&date.value())).unwrap();
        let mut t = Time::default();
        t.scan(SqlValue::Bytes(time.value().as_bytes())).unwrap();
        let mut x = DateTime::default();
        x.scan(SqlValue::TextRef(Some(&dt.value()))).unwrap();

        assert_eq!((d, t, x), (date, time, dt));
    }
}
