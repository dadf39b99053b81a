//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 MongoDB를 주 저장소로 사용하고
//! Redis가 있으면 조회 결과를 캐싱합니다.
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let repo = UserRepository::new(database.clone(), redis.clone());
//! let user = repo.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
