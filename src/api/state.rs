use actix_web::{HttpResponse, web};
use sqlx::AnyPool;

use crate::{
    api::record_or_empty,
    error::ApiError,
    model::{Entity, state::State},
    repository::Repository,
};

fn states(pool: &AnyPool) -> Repository<State> {
    Repository::new(pool.clone())
}

#[utoipa::path(
    get,
    path = "/states",
    responses(
        (status = 200, description = "All states", body = [State]),
        (status = 500, description = "Internal server error")
    ),
    tag = "State"
)]
pub async fn list_states(pool: web::Data<AnyPool>) -> Result<HttpResponse, ApiError> {
    let all = states(&pool).find_all().await?;
    Ok(HttpResponse::Ok().json(all))
}

#[utoipa::path(
    get,
    path = "/states/{state_id}",
    params(
        ("state_id" = i32, Path, description = "State ID")
    ),
    responses(
        (status = 200, description = "The state, or an empty body when absent", body = State),
        (status = 500, description = "Internal server error")
    ),
    tag = "State"
)]
pub async fn get_state(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let state = states(&pool).find_by_id(path.into_inner()).await?;
    Ok(record_or_empty(state))
}

#[utoipa::path(
    post,
    path = "/states",
    request_body = State,
    responses(
        (status = 200, description = "Stored state", body = State),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "State"
)]
pub async fn create_state(
    pool: web::Data<AnyPool>,
    payload: web::Json<State>,
) -> Result<HttpResponse, ApiError> {
    let saved = states(&pool).save(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    put,
    path = "/states/{state_id}",
    params(
        ("state_id" = i32, Path, description = "State ID, overrides any key in the body")
    ),
    request_body = State,
    responses(
        (status = 200, description = "Stored state", body = State),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "State"
)]
pub async fn update_state(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
    payload: web::Json<State>,
) -> Result<HttpResponse, ApiError> {
    let mut state = payload.into_inner();
    state.set_key(path.into_inner());

    let saved = states(&pool).save(state).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    delete,
    path = "/states/{state_id}",
    params(
        ("state_id" = i32, Path, description = "State ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Internal server error")
    ),
    tag = "State"
)]
pub async fn delete_state(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    states(&pool).delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app, test_pool};
    use actix_web::test;
    use serde_json::json;

    #[actix_web::test]
    async fn put_forces_path_key_over_body_key() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let req = test::TestRequest::post()
            .uri("/states")
            .set_json(json!({ "stateId": 1, "stateName": "Texas" }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created, json!({ "stateId": 1, "stateName": "Texas" }));

        let req = test::TestRequest::get().uri("/states/1").to_request();
        let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, json!({ "stateId": 1, "stateName": "Texas" }));

        let req = test::TestRequest::put()
            .uri("/states/1")
            .set_json(json!({ "stateId": 99, "stateName": "Tejas" }))
            .to_request();
        let updated: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated, json!({ "stateId": 1, "stateName": "Tejas" }));

        let req = test::TestRequest::get().uri("/states/1").to_request();
        let fetched: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, json!({ "stateId": 1, "stateName": "Tejas" }));

        let req = test::TestRequest::get().uri("/states/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn unknown_state_is_empty_not_error() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let req = test::TestRequest::get().uri("/states/12345").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn delete_missing_state_twice_succeeds() {
        let app = test::init_service(test_app(test_pool().await)).await;

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri("/states/5").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
            assert!(test::read_body(resp).await.is_empty());
        }

        let req = test::TestRequest::get().uri("/states").to_request();
        let all: Vec<State> = test::call_and_read_body_json(&app, req).await;
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn post_existing_key_overwrites() {
        let app = test::init_service(test_app(test_pool().await)).await;

        for name in ["Texas", "Lone Star"] {
            let req = test::TestRequest::post()
                .uri("/states")
                .set_json(json!({ "stateId": 1, "stateName": name }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/states").to_request();
        let all: Vec<State> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            all,
            vec![State {
                state_id: 1,
                state_name: Some("Lone Star".to_string()),
            }]
        );
    }
}
