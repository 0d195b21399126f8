//! 프로젝트 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::dto::common::validate_name;

/// 프로젝트 부분 수정 요청
///
/// - `name`: 있으면 덮어씀
/// - `users`: 있으면 기존 목록 전체를 교체 (병합하지 않음, `[]`은 목록을 비움)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,

    #[serde(default)]
    pub users: Option<Vec<i64>>,
}
