use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use utoipa::ToSchema;

use super::{AnyQuery, Entity, null_as_default, nullable_text};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[schema(
    example = json!({
        "empid": 1,
        "fname": "Snoopy",
        "lname": "Beagle",
        "email": "snoopy@example.com",
        "hireDate": "2022-08-01",
        "salary": 45000.0,
        "ssn": "111-11-1111"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    #[serde(deserialize_with = "null_as_default")]
    pub empid: i32,

    #[schema(example = "Snoopy", nullable = true)]
    pub fname: Option<String>,

    #[schema(example = "Beagle", nullable = true)]
    pub lname: Option<String>,

    #[schema(example = "snoopy@example.com", nullable = true)]
    pub email: Option<String>,

    /// Stored verbatim, no date parsing.
    #[schema(example = "2022-08-01", nullable = true)]
    pub hire_date: Option<String>,

    #[schema(example = 45000.0)]
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,

    #[schema(example = "111-11-1111", nullable = true)]
    pub ssn: Option<String>,
}

impl Entity for Employee {
    const TABLE: &'static str = "employee";
    const COLUMNS: &'static [&'static str] = &[
        "empid",
        "fname",
        "lname",
        "email",
        "hire_date",
        "salary",
        "ssn",
    ];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS employee (
            empid INT NOT NULL PRIMARY KEY,
            fname VARCHAR(255),
            lname VARCHAR(255),
            email VARCHAR(255),
            hire_date VARCHAR(255),
            salary DOUBLE NOT NULL DEFAULT 0,
            ssn VARCHAR(255)
        )
    "#;

    fn key(&self) -> i32 {
        self.empid
    }

    fn set_key(&mut self, key: i32) {
        self.empid = key;
    }

    fn bind_columns<'q>(&self, query: AnyQuery<'q>) -> AnyQuery<'q> {
        query
            .bind(self.empid)
            .bind(self.fname.clone())
            .bind(self.lname.clone())
            .bind(self.email.clone())
            .bind(self.hire_date.clone())
            .bind(self.salary)
            .bind(self.ssn.clone())
    }
}

impl<'r> FromRow<'r, AnyRow> for Employee {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            empid: row.try_get("empid")?,
            fname: nullable_text(row, "fname")?,
            lname: nullable_text(row, "lname")?,
            email: nullable_text(row, "email")?,
            hire_date: nullable_text(row, "hire_date")?,
            salary: row.try_get("salary")?,
            ssn: nullable_text(row, "ssn")?,
        })
    }
}
