//! # Routes Module
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! ```text
//! GET    /health
//! GET    /users          POST /users
//! GET    /users/{id}     PUT  /users/{id}     DELETE /users/{id}
//! GET    /projects       POST /projects
//! GET    /projects/{id}  PUT  /projects/{id}  DELETE /projects/{id}
//! ```
//!
//! 본문 추출(JSON, 폼)과 경로 파라미터 추출 실패는 모두 `AppError::ValidationError`로
//! 변환되어 `400 {"success": false, "error": ...}` 형태로 응답합니다.

use actix_web::{HttpResponse, error, get, web};
use serde_json::json;

use crate::config::StoreBackend;
use crate::core::errors::AppError;
use crate::handlers;
use crate::repositories::Stores;
use crate::services::projects::ProjectService;
use crate::services::users::UserService;

/// 저장소 묶음으로 서비스들을 만들고 라우트를 구성하는 설정 클로저를 반환합니다.
///
/// 서비스는 한 번만 생성되어 모든 워커가 공유합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let app = app_config(Stores::in_memory());
///
/// HttpServer::new(move || App::new().configure(app.clone()))
/// ```
pub fn app_config(stores: Stores) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let user_service = web::Data::new(UserService::new(stores.users.clone()));
    let project_service = web::Data::new(ProjectService::new(
        stores.projects.clone(),
        stores.users.clone(),
    ));
    let backend = web::Data::new(stores.backend);

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(user_service.clone())
            .app_data(project_service.clone())
            .app_data(backend.clone());

        configure_all_routes(cfg);
    }
}

/// 모든 라우트를 설정합니다
///
/// 서비스 데이터(`web::Data<UserService>` 등)는 호출 측에서 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_project_routes(cfg);
}

/// 추출기 에러를 `AppError::ValidationError`로 통일합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            error::JsonPayloadError::Deserialize(e) => e.to_string(),
            other => other.to_string(),
        };
        AppError::ValidationError(message).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(handlers::projects::list_projects)
            .service(handlers::projects::get_project)
            .service(handlers::projects::create_project)
            .service(handlers::projects::update_project)
            .service(handlers::projects::delete_project),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "project_users_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "store": "mongodb"
/// }
/// ```
#[get("/health")]
async fn health_check(backend: web::Data<StoreBackend>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": backend.as_str(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, middleware, test};
    use serde_json::Value;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(middleware::NormalizePath::trim())
                    .configure(app_config(Stores::in_memory())),
            )
            .await
        };
    }

    macro_rules! call {
        ($app:expr, $req:expr) => {{
            let resp = test::call_service(&$app, $req.to_request()).await;
            let status = resp.status();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }};
    }

    #[actix_web::test]
    async fn test_health_reports_store_backend() {
        let app = init_app!();

        let (status, body) = call!(app, test::TestRequest::get().uri("/health"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_user_lifecycle() {
        let app = init_app!();

        let (status, body) = call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 1, "name": "sam" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (_, body) = call!(app, test::TestRequest::get().uri("/users/1"));
        assert_eq!(body, json!({ "success": true, "data": { "id": 1, "name": "sam" } }));

        let (status, _) = call!(
            app,
            test::TestRequest::put()
                .uri("/users/1")
                .set_json(json!({ "name": "tom" }))
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/users"));
        assert_eq!(body, json!({ "success": true, "data": [{ "id": 1, "name": "tom" }] }));

        let (status, body) = call!(app, test::TestRequest::delete().uri("/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, body) = call!(app, test::TestRequest::get().uri("/users/1"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "error": "User not found" }));
    }

    #[actix_web::test]
    async fn test_project_references_are_expanded() {
        let app = init_app!();

        call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 1, "name": "tom" }))
        );
        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/projects")
                .set_json(json!({ "id": 1, "name": "ums", "users": [] }))
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/projects/1"));
        assert_eq!(
            body,
            json!({ "success": true, "data": { "id": 1, "name": "ums", "users": [] } })
        );

        let (status, _) = call!(
            app,
            test::TestRequest::put()
                .uri("/projects/1")
                .set_json(json!({ "users": [1] }))
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/projects"));
        assert_eq!(
            body,
            json!({
                "success": true,
                "data": [{ "id": 1, "name": "ums", "users": [{ "id": 1, "name": "tom" }] }]
            })
        );
    }

    #[actix_web::test]
    async fn test_missing_project_is_not_found() {
        let app = init_app!();

        let (status, body) = call!(app, test::TestRequest::get().uri("/projects/7"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "error": "Project not found" }));

        let (status, _) = call!(
            app,
            test::TestRequest::put()
                .uri("/projects/7")
                .set_json(json!({ "name": "x" }))
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_duplicate_id_is_server_error() {
        let app = init_app!();
        let create = || {
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 1, "name": "sam" }))
        };

        call!(app, create());
        let (status, body) = call!(app, create());
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("duplicate key"));
    }

    #[actix_web::test]
    async fn test_delete_missing_resource_succeeds() {
        let app = init_app!();

        let (status, body) = call!(app, test::TestRequest::delete().uri("/users/99"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, _) = call!(app, test::TestRequest::delete().uri("/projects/99"));
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_malformed_requests_are_bad_request() {
        let app = init_app!();

        let (status, body) = call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 1, "name": "sam", "role": "admin" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "name": "sam" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 2, "name": "  " }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/projects")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call!(app, test::TestRequest::get().uri("/users/abc"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_update_without_body_keeps_document() {
        let app = init_app!();

        call!(
            app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({ "id": 1, "name": "sam" }))
        );
        call!(
            app,
            test::TestRequest::post()
                .uri("/projects")
                .set_json(json!({ "id": 1, "name": "ums", "users": [1] }))
        );

        let (status, body) = call!(app, test::TestRequest::put().uri("/users/1"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, _) = call!(app, test::TestRequest::put().uri("/projects/1"));
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/users/1"));
        assert_eq!(body, json!({ "success": true, "data": { "id": 1, "name": "sam" } }));

        let (_, body) = call!(app, test::TestRequest::get().uri("/projects/1"));
        assert_eq!(body["data"]["users"], json!([{ "id": 1, "name": "sam" }]));

        let (status, _) = call!(app, test::TestRequest::put().uri("/users/2"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_form_encoded_bodies_are_accepted() {
        let app = init_app!();
        let form = |req: test::TestRequest, body: &'static str| {
            req.insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload(body)
        };

        let (status, _) = call!(
            app,
            form(test::TestRequest::post().uri("/users"), "id=2&name=bob")
        );
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call!(
            app,
            form(test::TestRequest::put().uri("/users/2"), "name=rob")
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/users/2"));
        assert_eq!(body, json!({ "success": true, "data": { "id": 2, "name": "rob" } }));

        let (status, _) = call!(
            app,
            form(test::TestRequest::post().uri("/projects"), "id=5&name=crm")
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/projects/5"));
        assert_eq!(
            body,
            json!({ "success": true, "data": { "id": 5, "name": "crm", "users": [] } })
        );

        let (status, body) = call!(
            app,
            form(test::TestRequest::post().uri("/users"), "id=abc&name=bob")
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_null_user_list_on_create_means_empty() {
        let app = init_app!();

        let (status, _) = call!(
            app,
            test::TestRequest::post()
                .uri("/projects")
                .set_json(json!({ "id": 1, "name": "p", "users": null }))
        );
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call!(app, test::TestRequest::get().uri("/projects/1"));
        assert_eq!(body["data"]["users"], json!([]));
    }

    #[actix_web::test]
    async fn test_trailing_slash_is_normalized() {
        let app = init_app!();

        let (status, body) = call!(app, test::TestRequest::get().uri("/users/"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": [] }));
    }
}
