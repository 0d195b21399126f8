//! # 사용자 관리 서비스 구현
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  list · get · create · update(name?) · delete│
//! └──────────────────────┬───────────────────────┘
//!                        │ Arc<dyn UserStore>
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │   UserRepository (MongoDB) │ MemoryStore     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 조회는 모두 도메인 ID(`id`) 기준이며, 삭제는 존재 여부와 관계없이 성공합니다.
//! 사용자 삭제 시 이를 참조하는 프로젝트는 정리하지 않습니다.

use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    /// 사용자 저장소
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 전체 사용자 목록 (필터, 페이징 없음)
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 도메인 ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - `"User not found"`
    pub async fn get_user(&self, id: i64) -> AppResult<UserResponse> {
        let user = self.find_existing(id).await?;
        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 중복 `id`는 저장소 에러(`DatabaseError`)로 그대로 전달됩니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<()> {
        let created = self.users.create(User::from(request)).await?;
        info!("사용자 생성 완료: id={}", created.id);

        Ok(())
    }

    /// 사용자 부분 수정
    ///
    /// `name`이 요청에 있으면 덮어쓰고, 없으면 기존 값을 유지한 채 저장합니다.
    pub async fn update_user(&self, id: i64, request: UpdateUserRequest) -> AppResult<()> {
        let mut user = self.find_existing(id).await?;

        if let Some(name) = request.name {
            user.name = name;
        }

        self.users.save(&user).await?;
        info!("사용자 수정 완료: id={}", id);

        Ok(())
    }

    /// 사용자 삭제 (멱등)
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        let deleted = self.users.delete_by_id(id).await?;

        if deleted {
            info!("사용자 삭제 완료: id={}", id);
        } else {
            debug!("삭제할 사용자 없음: id={}", id);
        }

        Ok(())
    }

    async fn find_existing(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::user_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Stores;

    fn service() -> UserService {
        UserService::new(Stores::in_memory().users)
    }

    fn create_request(id: i64, name: &str) -> CreateUserRequest {
        CreateUserRequest {
            id,
            name: name.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_created_user_can_be_fetched() {
        let service = service();
        service.create_user(create_request(1, "sam")).await.unwrap();

        let user = service.get_user(1).await.unwrap();
        assert_eq!(
            user,
            UserResponse {
                id: 1,
                name: "sam".to_string()
            }
        );
    }

    #[actix_web::test]
    async fn test_duplicate_create_fails_without_persisting() {
        let service = service();
        service.create_user(create_request(1, "sam")).await.unwrap();

        let err = service.create_user(create_request(1, "tom")).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));

        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "sam");
    }

    #[actix_web::test]
    async fn test_missing_user_is_not_found() {
        let err = service().get_user(42).await.unwrap_err();
        assert_eq!(err, AppError::NotFound("User not found".to_string()));
    }

    #[actix_web::test]
    async fn test_update_without_name_keeps_name() {
        let service = service();
        service.create_user(create_request(1, "sam")).await.unwrap();

        service.update_user(1, UpdateUserRequest::default()).await.unwrap();
        assert_eq!(service.get_user(1).await.unwrap().name, "sam");

        service
            .update_user(
                1,
                UpdateUserRequest {
                    name: Some("tom".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(service.get_user(1).await.unwrap().name, "tom");
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let err = service()
            .update_user(3, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err, AppError::user_not_found());
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let service = service();
        service.create_user(create_request(1, "sam")).await.unwrap();

        assert!(service.delete_user(1).await.is_ok());
        assert!(service.delete_user(1).await.is_ok());
        assert!(service.delete_user(999).await.is_ok());
        assert!(service.list_users().await.unwrap().is_empty());
    }
}
