use actix_web::middleware::{Logger, NormalizePath, from_fn};
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod middleware;
mod model;
mod repository;
mod routes;
mod service;
mod utils;

#[cfg(test)]
mod test_utils;

use config::Config;
use db::{ensure_schema, init_db};

use crate::docs::ApiDoc;
use crate::middleware::request_span;
use crate::repository::Repository;
use crate::service::employee::EmployeeService;
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Payroll records service is up"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, prefix = %config.api_prefix, "Server starting...");

    let pool = init_db(&config.database_url, config.db_max_connections).await?;
    ensure_schema(&pool).await?;

    let employee_service = Data::new(EmployeeService::new(Repository::new(pool.clone())));
    let server_addr = config.server_addr.clone();

    let limiter = routes::build_limiter(config.rate_per_min);
    if limiter.is_none() {
        warn!("Rate limiting disabled");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_span))
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(pool.clone()))
            .app_data(employee_service.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config, limiter.as_ref()))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
