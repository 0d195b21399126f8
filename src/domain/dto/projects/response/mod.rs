//! 프로젝트 응답 DTO

pub mod project_response;

pub use project_response::ProjectResponse;
