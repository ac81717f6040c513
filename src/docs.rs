use crate::model::{division::Division, employee::Employee, payroll::Payroll, state::State};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Records API",
        version = "1.0.0",
        description = r#"
## Payroll Records

Record-keeping backend for employees, payroll statements, divisions and states.

### Resources
- **Divisions** `/divisions`
- **Employees** `/employees`
- **Payrolls** `/payrolls`
- **States** `/states`

Every resource offers the same five operations: list, get by key, create,
replace by key, delete by key.

### Semantics
- Keys are chosen by the client.
- `POST` on an existing key overwrites it.
- `PUT /{resource}/{key}` stores the body under the path key, whatever key the body carries.
- `GET` on a missing key returns `200` with an empty body.
- `DELETE` on a missing key succeeds.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::division::list_divisions,
        crate::api::division::get_division,
        crate::api::division::create_division,
        crate::api::division::update_division,
        crate::api::division::delete_division,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::payroll::list_payrolls,
        crate::api::payroll::get_payroll,
        crate::api::payroll::create_payroll,
        crate::api::payroll::update_payroll,
        crate::api::payroll::delete_payroll,

        crate::api::state::list_states,
        crate::api::state::get_state,
        crate::api::state::create_state,
        crate::api::state::update_state,
        crate::api::state::delete_state
    ),
    components(
        schemas(
            Division,
            Employee,
            Payroll,
            State
        )
    ),
    tags(
        (name = "Division", description = "Division records"),
        (name = "Employee", description = "Employee records"),
        (name = "Payroll", description = "Payroll statements"),
        (name = "State", description = "State records"),
    )
)]
pub struct ApiDoc;
