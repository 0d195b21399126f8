//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::common::validate_name;
use crate::domain::entities::users::user::User;

/// 새 사용자 생성을 위한 요청 DTO
///
/// ```json
/// { "id": 1, "name": "sam" }
/// ```
///
/// `id`, `name` 외의 필드가 포함되면 역직렬화 단계에서 거부됩니다.
/// `id`의 중복 여부는 저장소의 유니크 인덱스가 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    /// 도메인 ID
    pub id: i64,

    /// 사용자 이름 (공백 불가)
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.id, request.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_request() {
        let request: CreateUserRequest =
            serde_json::from_value(json!({ "id": 1, "name": "sam" })).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(User::from(request), User::new(1, "sam".to_string()));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_json::from_value::<CreateUserRequest>(
            json!({ "id": 1, "name": "sam", "admin": true }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        assert!(serde_json::from_value::<CreateUserRequest>(json!({ "name": "sam" })).is_err());
        assert!(serde_json::from_value::<CreateUserRequest>(json!({ "id": 1 })).is_err());
    }

    #[test]
    fn test_non_integer_id_is_rejected() {
        assert!(
            serde_json::from_value::<CreateUserRequest>(json!({ "id": "one", "name": "sam" }))
                .is_err()
        );
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let request: CreateUserRequest =
            serde_json::from_value(json!({ "id": 1, "name": "  " })).unwrap();
        assert!(request.validate().is_err());
    }
}
