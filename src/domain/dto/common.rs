//! 공통 응답 봉투

use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationError;

/// 모든 성공 응답의 공통 형식
///
/// ```json
/// { "success": true }
/// { "success": true, "data": { "id": 1, "name": "sam" } }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 성공 플래그만 담은 응답
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
        }
    }
}

/// 이름 필드 공통 검증: 공백만으로 이루어진 이름은 허용하지 않습니다.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name").with_message("name must not be blank".into()));
    }
    Ok(())
}

/// 명시적인 `null`을 생략과 같이 취급하여 빈 목록으로 읽습니다.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
