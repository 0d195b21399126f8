//! # 프로젝트 관리 서비스 구현
//!
//! 프로젝트는 사용자 도메인 ID 목록(`users`)을 저장하며, 조회 응답에서는 각 ID를
//! 사용자 문서로 확장해서 돌려줍니다.
//!
//! ## 참조 확장 규칙
//!
//! - 조회 한 번당 `users` 컬렉션 쿼리는 한 번만 수행 (`$in` 배치 조회)
//! - 저장된 참조 순서를 유지하고, 중복 참조는 중복된 그대로 확장
//! - 존재하지 않는 사용자를 가리키는 참조는 응답에서 조용히 제외

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, info};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::projects::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::projects::project::Project;
use crate::domain::entities::users::user::User;
use crate::repositories::{ProjectStore, UserStore};

/// 프로젝트 관리 비즈니스 로직 서비스
pub struct ProjectService {
    projects: Arc<dyn ProjectStore>,
    /// 참조 확장에 쓰이는 사용자 저장소
    users: Arc<dyn UserStore>,
}

impl ProjectService {
    pub fn new(projects: Arc<dyn ProjectStore>, users: Arc<dyn UserStore>) -> Self {
        Self { projects, users }
    }

    /// 전체 프로젝트 목록 (사용자 참조 확장 포함)
    pub async fn list_projects(&self) -> AppResult<Vec<ProjectResponse>> {
        let projects = self.projects.find_all().await?;
        debug!("프로젝트 목록 조회: {}건", projects.len());

        let users = self.load_referenced_users(&projects).await?;

        Ok(projects
            .into_iter()
            .map(|project| expand(project, &users))
            .collect())
    }

    /// 도메인 ID로 프로젝트 조회 (사용자 참조 확장 포함)
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::NotFound)` - `"Project not found"`
    pub async fn get_project(&self, id: i64) -> AppResult<ProjectResponse> {
        let project = self.find_existing(id).await?;
        let users = self
            .load_referenced_users(std::slice::from_ref(&project))
            .await?;

        Ok(expand(project, &users))
    }

    /// 새 프로젝트 생성
    ///
    /// 참조 대상 사용자의 존재 여부는 확인하지 않습니다.
    pub async fn create_project(&self, request: CreateProjectRequest) -> AppResult<()> {
        let created = self.projects.create(Project::from(request)).await?;
        info!(
            "프로젝트 생성 완료: id={}, 참조 사용자 {}명",
            created.id,
            created.users.len()
        );

        Ok(())
    }

    /// 프로젝트 부분 수정
    ///
    /// `users`가 요청에 있으면 기존 목록을 통째로 교체합니다.
    pub async fn update_project(&self, id: i64, request: UpdateProjectRequest) -> AppResult<()> {
        let mut project = self.find_existing(id).await?;

        if let Some(name) = request.name {
            project.name = name;
        }
        if let Some(users) = request.users {
            project.users = users;
        }

        self.projects.save(&project).await?;
        info!("프로젝트 수정 완료: id={}", id);

        Ok(())
    }

    /// 프로젝트 삭제 (멱등)
    pub async fn delete_project(&self, id: i64) -> AppResult<()> {
        let deleted = self.projects.delete_by_id(id).await?;

        if deleted {
            info!("프로젝트 삭제 완료: id={}", id);
        } else {
            debug!("삭제할 프로젝트 없음: id={}", id);
        }

        Ok(())
    }

    async fn find_existing(&self, id: i64) -> AppResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::project_not_found)
    }

    /// 프로젝트들이 참조하는 사용자를 한 번의 조회로 읽어 ID별로 묶습니다.
    async fn load_referenced_users(&self, projects: &[Project]) -> AppResult<HashMap<i64, User>> {
        let mut seen = HashSet::new();
        let ids: Vec<i64> = projects
            .iter()
            .flat_map(|project| project.users.iter().copied())
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = self.users.find_by_ids(&ids).await?;
        debug!("참조 사용자 조회: 요청 {}건, 발견 {}건", ids.len(), users.len());

        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }
}

fn expand(project: Project, users: &HashMap<i64, User>) -> ProjectResponse {
    let expanded = project
        .users
        .iter()
        .filter_map(|id| users.get(id))
        .cloned()
        .map(UserResponse::from)
        .collect();

    ProjectResponse {
        id: project.id,
        name: project.name,
        users: expanded,
    }
}
