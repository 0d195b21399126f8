//! 프로젝트 리포지토리 모듈
//!
//! [`ProjectRepository`](project_repo::ProjectRepository)를 통해 MongoDB `projects` 컬렉션에 접근합니다.

pub mod project_repo;
