//! 사용자 관리 서비스 모듈
//!
//! 사용자 목록/단건 조회, 생성, 부분 수정, 삭제를 담당합니다.

pub mod user_service;

pub use user_service::UserService;
