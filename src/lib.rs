//! 프로젝트/사용자 관리 서비스 백엔드
//!
//! 사용자(`users`)와 프로젝트(`projects`) 두 컬렉션에 대한 최소한의 REST CRUD API를
//! 제공합니다. 프로젝트는 사용자 도메인 ID를 참조하며, 조회 시 참조가 사용자 문서로
//! 확장되어 응답됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 목록, 단건 조회, 생성, 부분 수정, 삭제
//! - **프로젝트 관리**: 같은 CRUD + 사용자 참조 확장 (배치 조회 1회)
//! - **저장소 교체**: MongoDB 또는 인메모리 저장소를 설정으로 선택
//! - **통일된 응답 엔벨로프**: `{"success": true, "data": ...}` / `{"success": false, "error": ...}`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 엔벨로프
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 참조 확장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / ProjectStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB │ Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use project_users_service::repositories::Stores;
//! use project_users_service::routes::app_config;
//!
//! let stores = Stores::open(StoreBackend::current()).await?;
//! let app = app_config(stores);
//!
//! HttpServer::new(move || App::new().configure(app.clone()))
//!     .bind(ServerConfig::bind_address())?
//!     .run()
//!     .await
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
