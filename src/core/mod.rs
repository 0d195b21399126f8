//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 `{success, error}` 응답 자동 생성
//! - **ErrorContext**: 드라이버/라이브러리 에러를 `AppError`로 변환하는 확장 trait

pub mod errors;
