//! Column decoding helpers shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use sv_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid_column(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| DbError::Corrupt {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp_column(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let millis: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Corrupt {
        message: format!("Invalid timestamp in {}: {}", column, millis),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn enum_column<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value: String = row.try_get(column)?;
    T::from_str(&value).map_err(|e| DbError::Corrupt {
        message: format!("Invalid value in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
