//! 인메모리 문서 저장소
//!
//! MongoDB 없이 서비스를 실행하거나 테스트할 때 사용하는 [`UserStore`] / [`ProjectStore`]
//! 구현입니다. 컬렉션별 도메인 ID 유니크 제약과 저장소 ID(`ObjectId`) 할당,
//! 그리고 에러 메시지 형식을 MongoDB 구현과 맞춥니다.

use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::Entity;
use crate::domain::entities::projects::project::Project;
use crate::domain::entities::users::user::User;
use crate::repositories::{
    ProjectStore, UserStore, document_not_found_message, duplicate_key_message, identity_filter,
};

/// 삽입 순서를 유지하는 단일 컬렉션
struct MemoryCollection<T: Entity> {
    documents: RwLock<Vec<T>>,
}

impl<T: Entity> MemoryCollection<T> {
    fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    fn find_all(&self) -> AppResult<Vec<T>> {
        let documents = self.documents.read().context(T::COLLECTION)?;
        Ok(documents.clone())
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let documents = self.documents.read().context(T::COLLECTION)?;
        Ok(documents.iter().find(|d| d.domain_id() == id).cloned())
    }

    fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<T>> {
        let documents = self.documents.read().context(T::COLLECTION)?;
        Ok(documents
            .iter()
            .filter(|d| ids.contains(&d.domain_id()))
            .cloned()
            .collect())
    }

    fn create(&self, mut document: T) -> AppResult<T> {
        let mut documents = self.documents.write().context(T::COLLECTION)?;

        if documents.iter().any(|d| d.domain_id() == document.domain_id()) {
            return Err(AppError::DatabaseError(duplicate_key_message::<T>(
                document.domain_id(),
            )));
        }

        document.set_object_id(document.object_id().unwrap_or_else(ObjectId::new));
        documents.push(document.clone());

        Ok(document)
    }

    /// 저장소 ID로 대상 문서를 찾아 교체합니다.
    ///
    /// 다른 문서가 이미 같은 도메인 ID를 쓰고 있으면 유니크 제약 위반입니다.
    fn save(&self, document: &T) -> AppResult<()> {
        let mut documents = self.documents.write().context(T::COLLECTION)?;

        let position = documents.iter().position(|d| match document.object_id() {
            Some(object_id) => d.object_id() == Some(object_id),
            None => d.domain_id() == document.domain_id(),
        });

        let Some(position) = position else {
            return Err(AppError::DatabaseError(document_not_found_message::<T>(
                &identity_filter(document),
            )));
        };

        let conflict = documents
            .iter()
            .enumerate()
            .any(|(i, d)| i != position && d.domain_id() == document.domain_id());
        if conflict {
            return Err(AppError::DatabaseError(duplicate_key_message::<T>(
                document.domain_id(),
            )));
        }

        let object_id = documents[position].object_id();
        let mut replacement = document.clone();
        if let Some(object_id) = object_id {
            replacement.set_object_id(object_id);
        }
        documents[position] = replacement;

        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut documents = self.documents.write().context(T::COLLECTION)?;

        match documents.iter().position(|d| d.domain_id() == id) {
            Some(position) => {
                documents.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// `users`, `projects` 두 컬렉션을 가진 인메모리 저장소
pub struct MemoryStore {
    users: MemoryCollection<User>,
    projects: MemoryCollection<Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("인메모리 저장소 생성");

        Self {
            users: MemoryCollection::new(),
            projects: MemoryCollection::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.users.find_all()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.users.find_by_id(id)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>> {
        self.users.find_by_ids(ids)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        self.users.create(user)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        self.users.save(user)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        self.users.delete_by_id(id)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Project>> {
        self.projects.find_all()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Project>> {
        self.projects.find_by_id(id)
    }

    async fn create(&self, project: Project) -> AppResult<Project> {
        self.projects.create(project)
    }

    async fn save(&self, project: &Project) -> AppResult<()> {
        self.projects.save(project)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        self.projects.delete_by_id(id)
    }
}
