//! # Application Error Handling System
//!
//! 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 모든 실패가 핸들러 경계에서 동일한 JSON 형식으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 JSON, 알 수 없는 필드, 숫자가 아닌 경로 ID |
//! | `NotFound` | 404 Not Found | 조회/수정 대상 문서 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 연결 실패, 중복 키, 쿼리 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "success": false, "error": "User not found" }
//! ```
//!
//! 저장소 에러 메시지는 가공 없이 그대로 클라이언트에 전달됩니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 저장소 계층 에러
    ///
    /// MongoDB 연산 중 발생한 모든 오류(연결 끊김, 유니크 인덱스 위반 등)입니다.
    /// 드라이버의 메시지를 그대로 담습니다.
    #[error("{0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 요청 본문이나 경로 파라미터가 입력 스키마와 맞지 않을 때 발생합니다.
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (고정 메시지)
    #[error("{0}")]
    NotFound(String),

    /// 내부 서버 에러
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found".to_string())
    }

    pub fn project_not_found() -> Self {
        AppError::NotFound("Project not found".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 `{success: false, error}` 형식의 JSON 응답으로 변환합니다.
    ///
    /// 5xx는 `error`, 4xx는 `warn` 레벨로 기록합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("요청 처리 실패 ({}): {}", status, self);
        } else {
            warn!("요청 거부 ({}): {}", status, self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 에러 메시지를 그대로 담은 `DatabaseError`로 변환합니다.
    fn store_err(self) -> AppResult<T>;

    /// 컨텍스트 정보와 함께 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn store_err(self) -> AppResult<T> {
        self.map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
