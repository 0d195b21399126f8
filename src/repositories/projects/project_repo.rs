//! # 프로젝트 리포지토리 구현
//!
//! MongoDB `projects` 컬렉션에 대한 [`ProjectStore`] 구현입니다.
//! 사용자 참조 확장은 서비스 계층에서 수행하므로 이 리포지토리는 참조 ID 목록을
//! 저장된 그대로 읽고 씁니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::Collection;
use mongodb::bson::doc;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::Entity;
use crate::domain::entities::projects::project::Project;
use crate::repositories::{ProjectStore, document_not_found_message, id_index, identity_filter};

/// 프로젝트 데이터 액세스 리포지토리
pub struct ProjectRepository {
    db: Arc<Database>,
}

impl ProjectRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Project> {
        self.db.collection::<Project>(Project::COLLECTION)
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn init(&self) -> AppResult<()> {
        self.collection()
            .create_index(id_index())
            .await
            .store_err()?;

        debug!("{} 컬렉션 인덱스 확인 완료", Project::COLLECTION);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Project>> {
        self.collection()
            .find(doc! {})
            .await
            .store_err()?
            .try_collect()
            .await
            .store_err()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Project>> {
        self.collection()
            .find_one(doc! { "id": id })
            .await
            .store_err()
    }

    async fn create(&self, mut project: Project) -> AppResult<Project> {
        let result = self
            .collection()
            .insert_one(&project)
            .await
            .store_err()?;

        if let Some(object_id) = result.inserted_id.as_object_id() {
            project.set_object_id(object_id);
        }

        Ok(project)
    }

    /// 문서 전체를 교체합니다. `users` 목록도 병합 없이 그대로 덮어씁니다.
    async fn save(&self, project: &Project) -> AppResult<()> {
        let filter = identity_filter(project);

        let result = self
            .collection()
            .replace_one(filter.clone(), project)
            .await
            .store_err()?;

        if result.matched_count == 0 {
            return Err(AppError::DatabaseError(document_not_found_message::<Project>(
                &filter,
            )));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "id": id })
            .await
            .store_err()?;

        Ok(result.deleted_count > 0)
    }
}
