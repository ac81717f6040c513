use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::{AnyQuery, Entity, null_as_default, nullable_text};

/// One pay statement. Every amount is supplied by the client; nothing here is
/// computed. `empid` is an informal reference and is never checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(
    example = json!({
        "payID": 1,
        "payDate": "2025-01-31",
        "earnings": 865.38,
        "fedTax": 276.92,
        "fedMed": 12.55,
        "fedSS": 53.65,
        "stateTax": 103.85,
        "retire401k": 3.46,
        "healthCare": 26.83,
        "empid": 1
    })
)]
pub struct Payroll {
    #[serde(rename = "payID", deserialize_with = "null_as_default")]
    #[schema(example = 1)]
    pub pay_id: i32,

    #[schema(example = "2025-01-31", nullable = true)]
    pub pay_date: Option<String>,

    #[schema(example = 865.38)]
    #[serde(deserialize_with = "null_as_default")]
    pub earnings: f64,

    #[schema(example = 276.92)]
    #[serde(deserialize_with = "null_as_default")]
    pub fed_tax: f64,

    #[schema(example = 12.55)]
    #[serde(deserialize_with = "null_as_default")]
    pub fed_med: f64,

    #[serde(rename = "fedSS", deserialize_with = "null_as_default")]
    #[schema(example = 53.65)]
    pub fed_ss: f64,

    #[schema(example = 103.85)]
    #[serde(deserialize_with = "null_as_default")]
    pub state_tax: f64,

    #[schema(example = 3.46)]
    #[serde(deserialize_with = "null_as_default")]
    pub retire_401k: f64,

    #[schema(example = 26.83)]
    #[serde(deserialize_with = "null_as_default")]
    pub health_care: f64,

    #[schema(example = 1)]
    #[serde(deserialize_with = "null_as_default")]
    pub empid: i32,
}

impl Entity for Payroll {
    const TABLE: &'static str = "payroll";
    const COLUMNS: &'static [&'static str] = &[
        "pay_id",
        "pay_date",
        "earnings",
        "fed_tax",
        "fed_med",
        "fed_ss",
        "state_tax",
        "retire_401k",
        "health_care",
        "empid",
    ];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS payroll (
            pay_id INT NOT NULL PRIMARY KEY,
            pay_date VARCHAR(255),
            earnings DOUBLE NOT NULL DEFAULT 0,
            fed_tax DOUBLE NOT NULL DEFAULT 0,
            fed_med DOUBLE NOT NULL DEFAULT 0,
            fed_ss DOUBLE NOT NULL DEFAULT 0,
            state_tax DOUBLE NOT NULL DEFAULT 0,
            retire_401k DOUBLE NOT NULL DEFAULT 0,
            health_care DOUBLE NOT NULL DEFAULT 0,
            empid INT NOT NULL DEFAULT 0
        )
    "#;

    fn key(&self) -> i32 {
        self.pay_id
    }

    fn set_key(&mut self, key: i32) {
        self.pay_id = key;
    }

    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.pay_id)
            .bind(self.pay_date.clone())
            .bind(self.earnings)
            .bind(self.fed_tax)
            .bind(self.fed_med)
            .bind(self.fed_ss)
            .bind(self.state_tax)
            .bind(self.retire_401k)
            .bind(self.health_care)
            .bind(self.empid)
    }
}

impl<'r> FromRow<'r, AnyRow> for Payroll {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            pay_id: row.try_get("pay_id")?,
            pay_date: nullable_text(row, "pay_date")?,
            earnings: row.try_get("earnings")?,
            fed_tax: row.try_get("fed_tax")?,
            fed_med: row.try_get("fed_med")?,
            fed_ss: row.try_get("fed_ss")?,
            state_tax: row.try_get("state_tax")?,
            retire_401k: row.try_get("retire_401k")?,
            health_care: row.try_get("health_care")?,
            empid: row.try_get("empid")?,
        })
    }
}
