//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙에서 관리합니다.
//! 프로필별 `.env` 파일(`.env.dev`, `.env.prod`)은 `main.rs`에서 먼저 로드됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongodb"          # mongodb | memory
//! export MONGODB_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="project_users_dev"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;

pub use data_config::*;
