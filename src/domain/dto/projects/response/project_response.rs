use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;

/// 프로젝트 응답 DTO
///
/// `users`는 참조가 확장(reference expansion)된 사용자 문서 목록입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub users: Vec<UserResponse>,
}
