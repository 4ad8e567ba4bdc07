//! `sqlx` integration for SQLite.
//!
//! SQLite has no native date or time storage class, so values are stored as
//! `TEXT` in their canonical form and decoded through [`Scanner`].

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Encode, Type};

use crate::sql::{Scanner, SqlValue, Valuer};
use crate::{Date, DateTime, Time};

macro_rules! impl_sqlite_text {
    ($ty:ty) => {
        impl Type<Sqlite> for $ty {
            fn type_info() -> SqliteTypeInfo {
                <str as Type<Sqlite>>::type_info()
            }
        }

        impl<'q> Encode<'q, Sqlite> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut Vec<SqliteArgumentValue<'q>>,
            ) -> Result<IsNull, BoxDynError> {
                Encode::<Sqlite>::encode(self.value(), buf)
            }
        }

        impl<'r> Decode<'r, Sqlite> for $ty {
            fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
                let text = <&str as Decode<Sqlite>>::decode(value)?;
                let mut out = Self::default();
                out.scan(SqlValue::Text(text))?;
                Ok(out)
            }
        }
    };
}

impl_sqlite_text!(Date);
impl_sqlite_text!(Time);
impl_sqlite_text!(DateTime);
