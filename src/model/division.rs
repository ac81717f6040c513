use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::{AnyQuery, Entity, null_as_default, nullable_text};

/// A company division. `city` is free text, not a reference to `City`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(
    example = json!({
        "id": 1,
        "name": "HQ",
        "city": "Atlanta",
        "postalCode": "30301"
    })
)]
pub struct Division {
    #[schema(example = 1)]
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,

    #[schema(example = "HQ", nullable = true)]
    pub name: Option<String>,

    #[schema(example = "Atlanta", nullable = true)]
    pub city: Option<String>,

    #[schema(example = "30301", nullable = true)]
    pub postal_code: Option<String>,
}

impl Entity for Division {
    const TABLE: &'static str = "division";
    const COLUMNS: &'static [&'static str] = &["id", "name", "city", "postal_code"];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS division (
            id INT NOT NULL PRIMARY KEY,
            name VARCHAR(255),
            city VARCHAR(255),
            postal_code VARCHAR(255)
        )
    "#;

    fn key(&self) -> i32 {
        self.id
    }

    fn set_key(&mut self, key: i32) {
        self.id = key;
    }

    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.id)
            .bind(self.name.clone())
            .bind(self.city.clone())
            .bind(self.postal_code.clone())
    }
}

impl<'r> FromRow<'r, AnyRow> for Division {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: nullable_text(row, "name")?,
            city: nullable_text(row, "city")?,
            postal_code: nullable_text(row, "postal_code")?,
        })
    }
}
