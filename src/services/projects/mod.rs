//! 프로젝트 관리 서비스 모듈
//!
//! 프로젝트 CRUD와 사용자 참조 확장(reference expansion)을 담당합니다.

pub mod project_service;

pub use project_service::ProjectService;
