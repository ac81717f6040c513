use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::{AnyQuery, Entity, null_as_default, nullable_text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(example = json!({ "stateId": 1, "stateName": "Texas" }))]
pub struct State {
    #[schema(example = 1)]
    #[serde(deserialize_with = "null_as_default")]
    pub state_id: i32,

    #[schema(example = "Texas", nullable = true)]
    pub state_name: Option<String>,
}

impl Entity for State {
    const TABLE: &'static str = "state";
    const COLUMNS: &'static [&'static str] = &["state_id", "state_name"];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS state (
            state_id INT NOT NULL PRIMARY KEY,
            state_name VARCHAR(255)
        )
    "#;

    fn key(&self) -> i32 {
        self.state_id
    }

    fn set_key(&mut self, key: i32) {
        self.state_id = key;
    }

    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query.bind(self.state_id).bind(self.state_name.clone())
    }
}

impl<'r> FromRow<'r, AnyRow> for State {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            state_id: row.try_get("state_id")?,
            state_name: nullable_text(row, "state_name")?,
        })
    }
}
