//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::common::validate_name;

/// 사용자 부분 수정 요청
///
/// 변경 가능한 필드는 `name`뿐입니다. 필드가 없으면(`None`) 기존 값을 유지합니다.
///
/// ```json
/// { "name": "tom" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_name_is_none() {
        let request: UpdateUserRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.name.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_explicit_empty_name_is_rejected() {
        let request: UpdateUserRequest = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert_eq!(request.name.as_deref(), Some(""));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_id_is_not_mutable() {
        assert!(serde_json::from_value::<UpdateUserRequest>(json!({ "id": 5 })).is_err());
    }
}
