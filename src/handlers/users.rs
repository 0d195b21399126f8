//! 사용자 HTTP 핸들러
//!
//! `/users` 스코프 아래에 등록됩니다.
//!
//! | Method | Path          | 설명          |
//! |--------|---------------|---------------|
//! | GET    | `/users`      | 전체 목록      |
//! | GET    | `/users/{id}` | 단건 조회      |
//! | POST   | `/users`      | 생성          |
//! | PUT    | `/users/{id}` | 부분 수정      |
//! | DELETE | `/users/{id}` | 삭제 (멱등)    |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::handlers::extractors::{RequestBody, UpdateBody};
use crate::services::users::UserService;

/// 사용자 목록 핸들러
///
/// # 응답
///
/// ```json
/// { "success": true, "data": [{ "id": 1, "name": "sam" }] }
/// ```
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(users)))
}

/// 사용자 단건 조회 핸들러
///
/// 없는 사용자는 `404 {"success": false, "error": "User not found"}`
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(user)))
}

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "id": 1, "name": "sam" }
/// ```
///
/// 폼 본문(`id=1&name=sam`)도 받습니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"id": 1, "name": "sam"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: RequestBody<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// 사용자 수정 핸들러
///
/// 본문에 있는 필드만 반영됩니다. `{}`나 빈 본문도 유효한 요청입니다.
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: UpdateBody<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service
        .update_user(id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
