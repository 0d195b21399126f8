//! # Domain Entities Module
//!
//! MongoDB 컬렉션에 저장되는 도메인 엔티티를 정의합니다.
//!
//! 모든 엔티티는 두 개의 식별자를 가집니다:
//!
//! - **도메인 ID (`id`)**: 비즈니스적으로 의미 있는 정수 ID. 컬렉션별 유니크 인덱스로 보장되며
//!   모든 조회, 수정, 삭제, 그리고 프로젝트의 사용자 참조가 이 값을 사용합니다.
//! - **저장소 ID (`_id`)**: MongoDB `ObjectId`. 문서 저장(save) 시 대상 문서를 특정하는 데만
//!   쓰이며 API 응답에는 노출되지 않습니다.
//!
//! ```text
//! users                          projects
//! ┌──────────────────────┐       ┌────────────────────────────┐
//! │ _id: ObjectId        │       │ _id: ObjectId              │
//! │ id: i64 (unique)     │◄──────│ users: [i64] (도메인 ID)   │
//! │ name: String         │       │ id: i64 (unique)           │
//! └──────────────────────┘       │ name: String               │
//!                                └────────────────────────────┘
//! ```

use mongodb::bson::oid::ObjectId;

pub mod projects;
pub mod users;

/// 컬렉션에 저장되는 문서의 공통 인터페이스
///
/// 저장소 구현(MongoDB, 메모리)이 엔티티 종류와 무관하게
/// 컬렉션 이름과 식별자에 접근할 수 있게 합니다.
pub trait Entity: Clone + Send + Sync {
    /// 문서가 저장되는 컬렉션 이름
    const COLLECTION: &'static str;

    /// 에러 메시지에 사용되는 모델 이름
    const MODEL: &'static str;

    fn domain_id(&self) -> i64;

    fn object_id(&self) -> Option<ObjectId>;

    fn set_object_id(&mut self, object_id: ObjectId);
}
