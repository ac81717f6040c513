use actix_web::{HttpResponse, web};
use sqlx::AnyPool;

use crate::{
    api::record_or_empty,
    error::ApiError,
    model::{Entity, division::Division},
    repository::Repository,
};

fn divisions(pool: &AnyPool) -> Repository<Division> {
    Repository::new(pool.clone())
}

#[utoipa::path(
    get,
    path = "/divisions",
    responses(
        (status = 200, description = "All divisions", body = [Division]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Division"
)]
pub async fn list_divisions(pool: web::Data<AnyPool>) -> Result<HttpResponse, ApiError> {
    let all = divisions(&pool).find_all().await?;
    Ok(HttpResponse::Ok().json(all))
}

#[utoipa::path(
    get,
    path = "/divisions/{id}",
    params(
        ("id" = i32, Path, description = "Division ID")
    ),
    responses(
        (status = 200, description = "The division, or an empty body when absent", body = Division),
        (status = 500, description = "Internal server error")
    ),
    tag = "Division"
)]
pub async fn get_division(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let division = divisions(&pool).find_by_id(path.into_inner()).await?;
    Ok(record_or_empty(division))
}

#[utoipa::path(
    post,
    path = "/divisions",
    request_body = Division,
    responses(
        (status = 200, description = "Stored division", body = Division),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Division"
)]
pub async fn create_division(
    pool: web::Data<AnyPool>,
    payload: web::Json<Division>,
) -> Result<HttpResponse, ApiError> {
    let saved = divisions(&pool).save(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    put,
    path = "/divisions/{id}",
    params(
        ("id" = i32, Path, description = "Division ID, overrides any key in the body")
    ),
    request_body = Division,
    responses(
        (status = 200, description = "Stored division", body = Division),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Division"
)]
pub async fn update_division(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
    payload: web::Json<Division>,
) -> Result<HttpResponse, ApiError> {
    let mut division = payload.into_inner();
    division.set_key(path.into_inner());

    let saved = divisions(&pool).save(division).await?;
    Ok(HttpResponse::Ok().json(saved))
}

#[utoipa::path(
    delete,
    path = "/divisions/{id}",
    params(
        ("id" = i32, Path, description = "Division ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Division"
)]
pub async fn delete_division(
    pool: web::Data<AnyPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    divisions(&pool).delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app, test_pool};
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn list_returns_every_created_division() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let bodies = [
            json!({ "id": 1, "name": "HQ", "city": "Atlanta", "postalCode": "30301" }),
            json!({ "id": 2, "name": "Space", "city": "Mars", "postalCode": "00000" }),
            json!({ "id": 3, "name": "Field", "city": "Macon", "postalCode": "31201" }),
        ];
        for body in &bodies {
            let req = test::TestRequest::post()
                .uri("/divisions")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/divisions").to_request();
        let all: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(all.len(), bodies.len());
        for body in &bodies {
            assert!(all.contains(body), "missing {body}");
        }
    }

    #[actix_web::test]
    async fn put_on_unknown_key_creates_it() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let req = test::TestRequest::put()
            .uri("/divisions/7")
            .set_json(json!({ "name": "Annex", "city": "Austin", "postalCode": "73301" }))
            .to_request();
        let stored: Division = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored.id, 7);

        let req = test::TestRequest::get().uri("/divisions/7").to_request();
        let fetched: Division = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, stored);
    }

    #[actix_web::test]
    async fn put_replaces_whole_record() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let req = test::TestRequest::post()
            .uri("/divisions")
            .set_json(json!({ "id": 4, "name": "HQ", "city": "Atlanta", "postalCode": "30301" }))
            .to_request();
        test::call_service(&app, req).await;

        // fields left out of a PUT body are cleared, not merged
        let req = test::TestRequest::put()
            .uri("/divisions/4")
            .set_json(json!({ "name": "Headquarters" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/divisions/4").to_request();
        let fetched: Division = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            fetched,
            Division {
                id: 4,
                name: Some("Headquarters".to_string()),
                city: None,
                postal_code: None,
            }
        );
    }

    #[actix_web::test]
    async fn delete_removes_division() {
        let app = test::init_service(test_app(test_pool().await)).await;

        let req = test::TestRequest::post()
            .uri("/divisions")
            .set_json(json!({ "id": 9, "name": "Temp" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/divisions/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/divisions/9").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(test::read_body(resp).await.is_empty());
    }
}
