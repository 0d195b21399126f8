//! 사용자 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB `users` 컬렉션에 접근합니다.

pub mod user_repo;
