use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;
use tracing::{error, warn};

/// Errors surfaced by the resource handlers.
///
/// A missing record is not an error; handlers answer it with an empty body.
#[derive(Debug, Display)]
pub enum ApiError {
    /// Body or path could not be deserialized
    #[display(fmt = "{}", _0)]
    BadRequest(String),

    /// Storage failure, passed through without retry
    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        error!(error = %e, "Storage operation failed");
        ApiError::Database(e)
    }
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "Rejected request body");
    ApiError::BadRequest(err.to_string()).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "Rejected path parameter");
    ApiError::BadRequest(err.to_string()).into()
}
