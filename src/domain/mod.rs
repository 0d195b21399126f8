//! # Domain Module
//!
//! 도메인 엔티티와 API 경계의 DTO를 정의합니다.
//!
//! - [`entities`] - 저장소에 저장되는 문서 (`User`, `Project`)
//! - [`dto`] - 요청/응답 데이터 구조와 입력 검증 규칙

pub mod dto;
pub mod entities;
