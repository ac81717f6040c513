use crate::{
    api::{division, employee, payroll, state},
    config::Config,
    error::{json_error_handler, path_error_handler},
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter, `None` when limiting is turned off.
///
/// Build it once and hand clones to every worker: clones share the same
/// quota state.
pub fn build_limiter(requests_per_min: u32) -> Option<RateLimit> {
    if requests_per_min == 0 {
        return None;
    }

    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Option<&RateLimit>) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    let resources = resources(&config.api_prefix);

    match limiter {
        Some(limiter) => {
            cfg.service(resources.wrap(Governor::new(limiter)));
        }
        None => {
            cfg.service(resources);
        }
    }
}

// City has a table and repository but is not routed.
fn resources(api_prefix: &str) -> Scope {
    web::scope(api_prefix)
        .service(
            web::scope("/divisions")
                // /divisions
                .service(
                    web::resource("")
                        .route(web::get().to(division::list_divisions))
                        .route(web::post().to(division::create_division)),
                )
                // /divisions/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(division::get_division))
                        .route(web::put().to(division::update_division))
                        .route(web::delete().to(division::delete_division)),
                ),
        )
        .service(
            web::scope("/employees")
                // /employees
                .service(
                    web::resource("")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee)),
                )
                // /employees/{empid}
                .service(
                    web::resource("/{empid}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::put().to(employee::update_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        )
        .service(
            web::scope("/payrolls")
                // /payrolls
                .service(
                    web::resource("")
                        .route(web::get().to(payroll::list_payrolls))
                        .route(web::post().to(payroll::create_payroll)),
                )
                // /payrolls/{pay_id}
                .service(
                    web::resource("/{pay_id}")
                        .route(web::get().to(payroll::get_payroll))
                        .route(web::put().to(payroll::update_payroll))
                        .route(web::delete().to(payroll::delete_payroll)),
                ),
        )
        .service(
            web::scope("/states")
                // /states
                .service(
                    web::resource("")
                        .route(web::get().to(state::list_states))
                        .route(web::post().to(state::create_state)),
                )
                // /states/{state_id}
                .service(
                    web::resource("/{state_id}")
                        .route(web::get().to(state::get_state))
                        .route(web::put().to(state::update_state))
                        .route(web::delete().to(state::delete_state)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app, test_app_with_limiter, test_pool};
    use actix_web::{http::StatusCode, test as awtest};
    use std::net::SocketAddr;

    #[test]
    fn zero_rate_disables_limiter() {
        assert!(build_limiter(0).is_none());
        assert!(build_limiter(60).is_some());
        assert!(build_limiter(1_000_000).is_some());
    }

    #[actix_web::test]
    async fn every_collection_is_routed() {
        let app = awtest::init_service(test_app(test_pool().await)).await;

        for uri in ["/divisions", "/employees", "/payrolls", "/states"] {
            let req = awtest::TestRequest::get().uri(uri).to_request();
            let resp = awtest::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        }
    }

    #[actix_web::test]
    async fn cities_are_not_exposed() {
        let app = awtest::init_service(test_app(test_pool().await)).await;

        let req = awtest::TestRequest::get().uri("/cities").to_request();
        let resp = awtest::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn limited_peer_gets_too_many_requests() {
        let app =
            awtest::init_service(test_app_with_limiter(test_pool().await, build_limiter(2)))
                .await;
        let peer: SocketAddr = "127.0.0.1:40000".parse().unwrap();

        let mut statuses = Vec::new();
        for _ in 0..3 {
            let req = awtest::TestRequest::get()
                .uri("/states")
                .peer_addr(peer)
                .to_request();
            statuses.push(awtest::call_service(&app, req).await.status());
        }

        assert_eq!(
            statuses,
            vec![StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS]
        );
    }

    #[actix_web::test]
    async fn limit_is_tracked_per_peer() {
        let app =
            awtest::init_service(test_app_with_limiter(test_pool().await, build_limiter(1)))
                .await;

        for peer in ["10.0.0.1:5000", "10.0.0.2:5000"] {
            let req = awtest::TestRequest::get()
                .uri("/payrolls")
                .peer_addr(peer.parse().unwrap())
                .to_request();
            let resp = awtest::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{peer}");
        }
    }
}
