//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 저장소 핸들(`Arc<dyn ...Store>`)을 생성자로 주입받으며,
//! 부트스트랩 시점에 `web::Data`로 감싸져 핸들러에 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, projects::ProjectService};
//!
//! let stores = Stores::in_memory();
//! let user_service = UserService::new(stores.users.clone());
//! let project_service = ProjectService::new(stores.projects.clone(), stores.users.clone());
//! ```

pub mod projects;
pub mod users;
