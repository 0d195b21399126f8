//! 프로젝트 엔티티 모듈

pub mod project;
