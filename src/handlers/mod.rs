//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, Frontend, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직, 참조 확장            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - MongoDB / 인메모리 저장소       ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<...Service>`로 주입받음
//! - 요청 본문은 JSON 또는 폼으로 받아([`extractors`]) `validator`로 검증한 뒤 서비스에 전달
//! - 성공 응답은 항상 `200 OK` + `ApiResponse` 엔벨로프
//! - 실패는 `AppError`를 반환하면 `ResponseError` 구현이 응답으로 변환
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     id: web::Path<i64>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user(id.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::with_data(user)))
//! }
//! ```

pub mod extractors;
pub mod projects;
pub mod users;
