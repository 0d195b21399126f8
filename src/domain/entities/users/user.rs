//! User Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Entity;

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서입니다. `id`는 컬렉션 내에서 유니크합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    /// 도메인 ID (unique)
    pub id: i64,
    /// 사용자 이름
    pub name: String,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    pub fn new(id: i64, name: String) -> Self {
        Self {
            object_id: None,
            id,
            name,
        }
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";
    const MODEL: &'static str = "user";

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
