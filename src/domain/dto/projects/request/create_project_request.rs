//! 프로젝트 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::common::{null_as_empty, validate_name};
use crate::domain::entities::projects::project::Project;

/// 새 프로젝트 생성을 위한 요청 DTO
///
/// ```json
/// { "id": 1, "name": "ums", "users": [1, 2] }
/// ```
///
/// `users`는 생략하거나 `null`이면 빈 목록이며, 참조 대상 사용자의 존재 여부는 검사하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub id: i64,

    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// 참조할 사용자 도메인 ID 목록 (생략 또는 `null`이면 빈 목록)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<i64>,
}

impl From<CreateProjectRequest> for Project {
    fn from(request: CreateProjectRequest) -> Self {
        Project::new(request.id, request.name, request.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_users_default_to_empty() {
        let request: CreateProjectRequest =
            serde_json::from_value(json!({ "id": 1, "name": "ums" })).unwrap();

        assert!(request.validate().is_ok());
        assert!(Project::from(request).users.is_empty());
    }

    #[test]
    fn test_null_users_means_empty() {
        let request: CreateProjectRequest =
            serde_json::from_value(json!({ "id": 1, "name": "ums", "users": null })).unwrap();

        assert!(request.users.is_empty());
    }

    #[test]
    fn test_user_references_must_be_integers() {
        let result = serde_json::from_value::<CreateProjectRequest>(
            json!({ "id": 1, "name": "ums", "users": ["507f1f77bcf86cd799439011"] }),
        );
        assert!(result.is_err());
    }
}
