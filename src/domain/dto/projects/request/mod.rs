//! 프로젝트 요청 DTO

pub mod create_project_request;
pub mod update_project_request;

pub use create_project_request::CreateProjectRequest;
pub use update_project_request::UpdateProjectRequest;
