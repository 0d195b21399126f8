//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션별 저장소 인터페이스([`UserStore`], [`ProjectStore`])와 두 가지 구현을 제공합니다.
//!
//! - [`users::user_repo::UserRepository`], [`projects::project_repo::ProjectRepository`]:
//!   MongoDB 컬렉션 기반 구현
//! - [`memory::MemoryStore`]: 같은 유니크 제약을 흉내 내는 인메모리 구현
//!
//! 서비스 계층은 `Arc<dyn UserStore>` / `Arc<dyn ProjectStore>`만 알고 있으므로
//! 부트스트랩 시점에 어떤 백엔드를 주입하느냐로 저장소를 교체할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Stores;
//!
//! let stores = Stores::open(StoreBackend::current()).await?;
//! let user = stores.users.find_by_id(1).await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::{IndexModel, options::IndexOptions};

use crate::config::StoreBackend;
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::entities::Entity;
use crate::domain::entities::projects::project::Project;
use crate::domain::entities::users::user::User;

pub mod memory;
pub mod projects;
pub mod users;

use memory::MemoryStore;
use projects::project_repo::ProjectRepository;
use users::user_repo::UserRepository;

/// 도메인 ID 유니크 인덱스 이름
pub const ID_INDEX_NAME: &str = "id_unique";

/// `users` 컬렉션 저장소 인터페이스
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 인덱스 생성 등 저장소 초기화
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    /// 전체 사용자를 저장소 순서대로 반환
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 도메인 ID로 단건 조회
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 도메인 ID 목록에 해당하는 사용자들을 조회 (순서 보장 없음, 없는 ID는 무시)
    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>>;

    /// 새 문서를 저장하고 저장소 ID가 채워진 엔티티를 반환
    async fn create(&self, user: User) -> AppResult<User>;

    /// 기존 문서를 엔티티 내용으로 교체
    async fn save(&self, user: &User) -> AppResult<()>;

    /// 도메인 ID로 한 건 삭제. 실제로 삭제되었는지 여부를 반환
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// `projects` 컬렉션 저장소 인터페이스
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn init(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Project>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Project>>;

    async fn create(&self, project: Project) -> AppResult<Project>;

    async fn save(&self, project: &Project) -> AppResult<()>;

    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// 도메인 ID 유니크 인덱스 정의 (`{ id: 1 }`, unique)
pub(crate) fn id_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "id": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(ID_INDEX_NAME.to_string())
                .build(),
        )
        .build()
}

/// 문서 저장 시 대상을 특정하는 필터
///
/// 저장소 ID가 있으면 `_id`로, 없으면 도메인 ID로 찾습니다.
pub(crate) fn identity_filter<T: Entity>(entity: &T) -> Document {
    match entity.object_id() {
        Some(object_id) => doc! { "_id": object_id },
        None => doc! { "id": entity.domain_id() },
    }
}

/// 저장 대상 문서가 사라졌을 때의 에러 메시지
pub(crate) fn document_not_found_message<T: Entity>(filter: &Document) -> String {
    format!(
        "No document found for query \"{}\" on model \"{}\"",
        filter,
        T::MODEL
    )
}

/// 중복 도메인 ID 에러 메시지 (MongoDB E11000 형식)
pub(crate) fn duplicate_key_message<T: Entity>(id: i64) -> String {
    format!(
        "E11000 duplicate key error collection: {} index: {} dup key: {{ id: {} }}",
        T::COLLECTION,
        ID_INDEX_NAME,
        id
    )
}

/// 부트스트랩 시 생성되어 서비스에 주입되는 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub backend: StoreBackend,
}

impl Stores {
    /// 설정된 백엔드로 저장소를 열고 초기화합니다.
    pub async fn open(backend: StoreBackend) -> AppResult<Self> {
        let stores = match backend {
            StoreBackend::MongoDb => Self::mongodb(Arc::new(Database::new().await?)),
            StoreBackend::Memory => Self::in_memory(),
        };

        stores.users.init().await?;
        stores.projects.init().await?;

        Ok(stores)
    }

    pub fn mongodb(db: Arc<Database>) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.clone())),
            projects: Arc::new(ProjectRepository::new(db)),
            backend: StoreBackend::MongoDb,
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            users: store.clone(),
            projects: store,
            backend: StoreBackend::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_identity_filter_prefers_object_id() {
        let mut user = User::new(7, "sam".to_string());
        assert_eq!(identity_filter(&user), doc! { "id": 7_i64 });

        let object_id = ObjectId::new();
        user.set_object_id(object_id);
        assert_eq!(identity_filter(&user), doc! { "_id": object_id });
    }

    #[test]
    fn test_duplicate_key_message_names_collection() {
        let message = duplicate_key_message::<Project>(3);
        assert!(message.starts_with("E11000"));
        assert!(message.contains("projects"));
        assert!(message.contains("id: 3"));
    }
}
