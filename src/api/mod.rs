use actix_web::HttpResponse;
use serde::Serialize;

pub mod division;
pub mod employee;
pub mod payroll;
pub mod state;

/// A missing record is a normal outcome: 200 with an empty body.
pub(crate) fn record_or_empty<T: Serialize>(record: Option<T>) -> HttpResponse {
    match record {
        Some(r) => HttpResponse::Ok().json(r),
        None => HttpResponse::Ok().finish(),
    }
}
