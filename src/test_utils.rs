//! Shared fixtures for the in-crate tests: an in-memory SQLite pool with the
//! schema applied, and an `App` wired the same way `main` wires it.

use actix_web::{
    App,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{NormalizePath, from_fn},
    web::Data,
};
use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};

use crate::{
    config::Config,
    db::ensure_schema,
    middleware::request_span,
    repository::Repository,
    routes::{self, RateLimit},
    service::employee::EmployeeService,
};

/// Every call gets its own database. The pool is capped at one connection
/// because each new `sqlite::memory:` connection opens a fresh, empty database.
pub async fn test_pool() -> AnyPool {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    ensure_schema(&pool).await.expect("Failed to create schema");
    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        db_max_connections: 1,
        rate_per_min: 0,
        api_prefix: String::new(),
        log_dir: "logs".to_string(),
    }
}

pub fn test_app(
    pool: AnyPool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app_with_limiter(pool, None)
}

pub fn test_app_with_limiter(
    pool: AnyPool,
    limiter: Option<RateLimit>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = test_config();
    let employee_service = EmployeeService::new(Repository::new(pool.clone()));

    App::new()
        .wrap(from_fn(request_span))
        .wrap(NormalizePath::trim())
        .app_data(Data::new(pool))
        .app_data(Data::new(employee_service))
        .configure(move |cfg| routes::configure(cfg, &config, limiter.as_ref()))
}
