use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::{AnyQuery, Entity, null_as_default, nullable_text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct City {
    #[schema(example = 1)]
    #[serde(deserialize_with = "null_as_default")]
    pub city_id: i32,

    #[schema(example = "Austin", nullable = true)]
    pub city_name: Option<String>,
}

impl Entity for City {
    const TABLE: &'static str = "city";
    const COLUMNS: &'static [&'static str] = &["city_id", "city_name"];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS city (
            city_id INT NOT NULL PRIMARY KEY,
            city_name VARCHAR(255)
        )
    "#;

    fn key(&self) -> i32 {
        self.city_id
    }

    fn set_key(&mut self, key: i32) {
        self.city_id = key;
    }

    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query.bind(self.city_id).bind(self.city_name.clone())
    }
}

impl<'r> FromRow<'r, AnyRow> for City {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            city_id: row.try_get("city_id")?,
            city_name: nullable_text(row, "city_name")?,
        })
    }
}
