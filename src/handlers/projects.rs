//! 프로젝트 HTTP 핸들러
//!
//! `/projects` 스코프 아래에 등록됩니다. 조회 응답의 `users`는 사용자 문서로
//! 확장되어 내려갑니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::projects::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::handlers::extractors::{RequestBody, UpdateBody};
use crate::services::projects::ProjectService;

#[get("")]
pub async fn list_projects(service: web::Data<ProjectService>) -> Result<HttpResponse, AppError> {
    let projects = service.list_projects().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(projects)))
}

/// 프로젝트 단건 조회 핸들러
///
/// # 응답
///
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "name": "ums", "users": [{ "id": 1, "name": "tom" }] }
/// }
/// ```
#[get("/{id}")]
pub async fn get_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let project = service.get_project(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(project)))
}

/// 프로젝트 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/projects \
///   -H "Content-Type: application/json" \
///   -d '{"id": 1, "name": "ums", "users": []}'
/// ```
#[post("")]
pub async fn create_project(
    service: web::Data<ProjectService>,
    payload: RequestBody<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service.create_project(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// 프로젝트 수정 핸들러
///
/// `users`가 있으면 기존 참조 목록을 통째로 교체합니다. 빈 본문은 아무 필드도 바꾸지 않습니다.
#[put("/{id}")]
pub async fn update_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
    payload: UpdateBody<UpdateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    service
        .update_project(id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

#[delete("/{id}")]
pub async fn delete_project(
    service: web::Data<ProjectService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_project(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
