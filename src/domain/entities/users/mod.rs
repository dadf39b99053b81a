//! Users Entity Module
//!
//! 사용자 엔티티와 역할(`STUDENT`, `ADMIN`, `EVENT_ADMIN`)을 정의합니다.

pub mod user;

pub use user::{User, UserChanges, UserRole};
