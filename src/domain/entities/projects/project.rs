//! Project Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Entity;

/// 프로젝트 엔티티
///
/// `projects` 컬렉션의 문서입니다. `users`는 참조하는 사용자들의 **도메인 ID** 목록이며
/// 저장된 순서를 유지합니다. 참조 무결성은 검증하지 않으므로 삭제된 사용자를
/// 가리키는 항목이 남아 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// 도메인 ID (unique)
    pub id: i64,
    /// 프로젝트 이름
    pub name: String,
    /// 참조하는 사용자 도메인 ID 목록
    #[serde(default)]
    pub users: Vec<i64>,
}

impl Project {
    pub fn new(id: i64, name: String, users: Vec<i64>) -> Self {
        Self {
            object_id: None,
            id,
            name,
            users,
        }
    }
}

impl Entity for Project {
    const COLLECTION: &'static str = "projects";
    const MODEL: &'static str = "project";

    fn domain_id(&self) -> i64 {
        self.id
    }

    fn object_id(&self) -> Option<ObjectId> {
        self.object_id
    }

    fn set_object_id(&mut self, object_id: ObjectId) {
        self.object_id = Some(object_id);
    }
}
