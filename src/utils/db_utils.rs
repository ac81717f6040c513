//! SQL text builders for the generic repository.
//!
//! Table and column names come from `Entity` constants, never from request
//! input, so plain string formatting is safe here. Values are always bound.

/// ===============================
/// SELECT every row
/// ===============================
pub fn build_select_all_sql(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        columns.join(", "),
        table,
        columns[0]
    )
}

/// ===============================
/// SELECT one row by key
/// ===============================
pub fn build_select_by_key_sql(table: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        columns.join(", "),
        table,
        columns[0]
    )
}

/// ===============================
/// Insert-or-overwrite by key
/// ===============================
///
/// `REPLACE INTO` is understood by both MySQL and SQLite and replaces the
/// whole row when the key already exists.
pub fn build_upsert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()].join(", ");

    format!(
        "REPLACE INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    )
}

/// ===============================
/// DELETE by key
/// ===============================
pub fn build_delete_sql(table: &str, key_column: &str) -> String {
    format!("DELETE FROM {} WHERE {} = ?", table, key_column)
}
