//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **도메인 ID 조회**: 모든 조회/삭제는 `_id`가 아닌 `id` 필드를 기준으로 합니다.
//! - **유니크 인덱스**: `init()`에서 `id_unique` 인덱스를 생성하며, 중복 생성 시
//!   드라이버의 E11000 에러가 그대로 `DatabaseError`로 전달됩니다.
//! - **배치 조회**: 프로젝트 참조 확장을 위해 `$in` 쿼리 한 번으로 여러 사용자를 가져옵니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::Collection;
use mongodb::bson::doc;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::db::Database;
use crate::domain::entities::Entity;
use crate::domain::entities::users::user::User;
use crate::repositories::{UserStore, document_not_found_message, id_index, identity_filter};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(database);
/// repo.init().await?;
///
/// let created = repo.create(User::new(1, "sam".to_string())).await?;
/// let found = repo.find_by_id(1).await?;
/// let deleted = repo.delete_by_id(1).await?;
/// ```
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(User::COLLECTION)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// `id` 필드 유니크 인덱스를 생성합니다. 이미 존재하면 아무 일도 하지 않습니다.
    async fn init(&self) -> AppResult<()> {
        self.collection()
            .create_index(id_index())
            .await
            .store_err()?;

        debug!("{} 컬렉션 인덱스 확인 완료", User::COLLECTION);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.collection()
            .find(doc! {})
            .await
            .store_err()?
            .try_collect()
            .await
            .store_err()
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "id": id })
            .await
            .store_err()
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection()
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await
            .store_err()?
            .try_collect()
            .await
            .store_err()
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self
            .collection()
            .insert_one(&user)
            .await
            .store_err()?;

        if let Some(object_id) = result.inserted_id.as_object_id() {
            user.set_object_id(object_id);
        }

        Ok(user)
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let filter = identity_filter(user);

        let result = self
            .collection()
            .replace_one(filter.clone(), user)
            .await
            .store_err()?;

        if result.matched_count == 0 {
            return Err(AppError::DatabaseError(document_not_found_message::<User>(
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
