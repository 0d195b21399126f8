//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의합니다.
//! 엔티티(저장소 표현)와 DTO(외부 표현)를 분리하여 저장소 내부 키(`_id`)가
//! 응답에 노출되지 않고, 요청 본문은 명시적인 입력 스키마를 통과해야만 저장소에 도달합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common.rs           # 공통 응답 봉투 { success, data? }
//! ├── users/
//! │   ├── request/        # CreateUserRequest, UpdateUserRequest
//! │   └── response/       # UserResponse
//! └── projects/
//!     ├── request/        # CreateProjectRequest, UpdateProjectRequest
//!     └── response/       # ProjectResponse
//! ```
//!
//! ## 입력 스키마 규칙
//!
//! - 알 수 없는 필드는 `#[serde(deny_unknown_fields)]`로 거부합니다.
//! - 필수 필드 누락, 타입 불일치는 역직렬화 단계에서 400으로 거부됩니다.
//! - 부분 수정 요청은 `Option<T>`로 "필드 없음"과 "값 있음"을 구분합니다.

pub mod common;
pub mod projects;
pub mod users;

pub use common::*;
