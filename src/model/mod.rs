use serde::{Deserialize, Deserializer};
use sqlx::any::{Any, AnyArguments, AnyRow};
use sqlx::query::Query;
use sqlx::{Row, ValueRef};

pub mod city;
pub mod division;
pub mod employee;
pub mod payroll;
pub mod state;

pub type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// Table mapping for a record keyed by a caller-supplied integer.
///
/// Everything the repository needs to build SQL is declared here, so each
/// model spells out its own table, columns and bind order.
pub trait Entity: for<'r> sqlx::FromRow<'r, AnyRow> + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;

    /// Key column first, then the remaining columns in bind order.
    const COLUMNS: &'static [&'static str];

    /// `CREATE TABLE IF NOT EXISTS` statement for this entity.
    const CREATE_TABLE: &'static str;

    fn key(&self) -> i32;

    fn set_key(&mut self, key: i32);

    /// Binds every column value, in `COLUMNS` order.
    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q>;

    fn key_column() -> &'static str {
        Self::COLUMNS[0]
    }
}

/// Reads a nullable text column.
///
/// The Any driver types a NULL cell as SQL `NULL`, which `Option<String>`
/// refuses to decode, so NULL is checked on the raw value first.
pub(crate) fn nullable_text(row: &AnyRow, column: &str) -> Result<Option<String>, sqlx::Error> {
    if row.try_get_raw(column)?.is_null() {
        return Ok(None);
    }
    row.try_get(column).map(Some)
}

/// JSON `null` for a numeric field reads as the type's default (0).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
