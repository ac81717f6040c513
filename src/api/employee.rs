use actix_web::{HttpResponse, web};
use tracing::instrument;

use crate::{
    api::record_or_empty,
    error::ApiError,
    model::{Entity, employee::Employee},
    service::employee::EmployeeService,
};

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Stored employee", body = Employee),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Employee"
)]
#[instrument(skip_all, fields(empid = payload.empid))]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    let saved = service.save_employee(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, ApiError> {
    let employees = service.get_all_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{empid}",
    params(
        ("empid" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The employee, or an empty body when absent", body = Employee),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let employee = service.get_employee_by_id(path.into_inner()).await?;
    Ok(record_or_empty(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/employees/{empid}",
    params(
        ("empid" = i32, Path, description = "Employee ID, overrides any key in the body")
    ),
    request_body = Employee,
    responses(
        (status = 200, description = "Stored employee", body = Employee),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
#[instrument(skip_all, fields(empid = *path))]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i32>,
    payload: web::Json<Employee>,
) -> Result<HttpResponse, ApiError> {
    let mut employee = payload.into_inner();
    employee.set_key(path.into_inner());

    let saved = service.update_employee(employee).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{empid}",
    params(
        ("empid" = i32, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    service.delete_employee(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}
