use actix_web::{HttpResponse, web};
use sqlx::AnyPool;
use tracing::instrument;

use crate::{
    api::record_or_empty,
    error::ApiError,
    model::{Entity, payroll::Payroll},
    repository::Repository,
};

fn payrolls(pool: &AnyPool) -> Repository<Payroll> {
    Repository::new(pool.clone())
}

#[utoipa::path(
    get,
    path = "/payrolls",
    responses(
        (status = 200, description = "All payroll records", body = [Payroll]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn list_payrolls(pool: web::Data<AnyPool>) -> Result<HttpResponse, ApiError> {
    let all = payrolls(&pool).find_all().await?;
    Ok(HttpResponse::Ok().json(all))
}

#[utoipa::path(
    get,
    path = "/payrolls/{pay_id}",
    params(
        ("pay_id" = i32, Path, description = "Payroll ID")
    ),
    responses(
        (status = 200, description = "The payroll record, or an empty body when absent", body = Payroll),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn get_payroll(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let payroll = payrolls(&pool).find_by_id(path.into_inner()).await?;
    Ok(record_or_empty(payroll))
}

#[utoipa::path(
    post,
    path = "/payrolls",
    request_body = Payroll,
    responses(
        (status = 200, description = "Stored payroll record", body = Payroll),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
#[instrument(skip_all, fields(pay_id = payload.pay_id, empid = payload.empid))]
pub async fn create_payroll(
    pool: web::Data<AnyPool>,
    payload: web::Json<Payroll>,
) -> Result<HttpResponse, ApiError> {
    let saved = payrolls(&pool).save(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    put,
    path = "/payrolls/{pay_id}",
    params(
        ("pay_id" = i32, Path, description = "Payroll ID, overrides any key in the body")
    ),
    request_body = Payroll,
    responses(
        (status = 200, description = "Stored payroll record", body = Payroll),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
#[instrument(skip_all, fields(pay_id = *path, empid = payload.empid))]
pub async fn update_payroll(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
    payload: web::Json<Payroll>,
) -> Result<HttpResponse, ApiError> {
    let mut payroll = payload.into_inner();
    payroll.set_key(path.into_inner());

    let saved = payrolls(&pool).save(payroll).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    delete,
    path = "/payrolls/{pay_id}",
    params(
        ("pay_id" = i32, Path, description = "Payroll ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payroll"
)]
pub async fn delete_payroll(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    payrolls(&pool).delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}
