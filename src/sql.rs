//! Generic database value protocol.
//!
//! A driver hands column values over as a [`SqlValue`]; the civil types
//! narrow it with [`Scanner::scan`] and produce storage values with
//! [`Valuer::value`], which is always the canonical text form.

use jiff::{Zoned, civil};

use crate::Error;

/// A dynamically typed value coming out of a database driver.
///
/// The `*Ref` variants model nullable by-reference inputs: `None` is an
/// absent value, distinct from a SQL `NULL`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
    TextRef(Option<&'a str>),
    Bytes(&'a [u8]),
    BytesRef(Option<&'a [u8]>),
    Timestamp(&'a Zoned),
    TimestampRef(Option<&'a Zoned>),
    Date(civil::Date),
    Time(civil::Time),
    DateTime(civil::DateTime),
}

impl SqlValue<'_> {
    /// Name of the value kind, used in `TypeMismatch` errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "BOOLEAN",
            Self::Int(_) => "INTEGER",
            Self::Float(_) => "REAL",
            Self::Text(_) => "TEXT",
            Self::TextRef(_) => "&TEXT",
            Self::Bytes(_) => "BLOB",
            Self::BytesRef(_) => "&BLOB",
            Self::Timestamp(_) => "TIMESTAMP",
            Self::TimestampRef(_) => "&TIMESTAMP",
            Self::Date(_) => "DATE",
            Self::Time(_) => "TIME",
            Self::DateTime(_) => "DATETIME",
        }
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a [u8]> for SqlValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Zoned> for SqlValue<'a> {
    fn from(zdt: &'a Zoned) -> Self {
        Self::Timestamp(zdt)
    }
}

/// Reads a civil value out of a driver value.
pub trait Scanner {
    /// Overwrites `self` with the value carried by `value`.
    ///
    /// # Errors
    /// Returns `Error::Format` when textual input does not parse and
    /// `Error::TypeMismatch` when the value kind is not accepted. `self` is
    /// left untouched on error.
    fn scan(&mut self, value: SqlValue<'_>) -> Result<(), Error>;
}

/// Produces the value stored in the database.
pub trait Valuer {
    fn value(&self) -> String;
}
