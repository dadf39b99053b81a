//! # Domain Entities Module
//!
//! MongoDB 문서와 1:1로 대응하는 영속 엔티티를 정의합니다.
//!
//! ## 엔티티와 참조 규칙
//!
//! ```text
//! User ◀──────── Club.admin_id      (약한 참조: 사용자 삭제 시 None)
//!  │   ◀──────── Club.members       (명단: 사용자 삭제 시 제거)
//!  │   ◀──────── Event.created_by   (약한 참조: 사용자 삭제 시 None)
//!  │   ◀──────── Event.attendees    (명단: 사용자 삭제 시 제거)
//!  └── ◀──────── Feedback.user_id   (강한 참조: 사용자 삭제 시 삭제)
//!
//! Club ◀──────── Event.club_id      (강한 참조: 클럽 삭제 시 삭제)
//!      ◀──────── Feedback.club_id   (강한 참조: 클럽 삭제 시 삭제)
//! ```
//!
//! ## 공통 특징
//!
//! - `_id`는 `Option<ObjectId>`이며 저장 시 채워집니다.
//! - 시간 필드는 `bson::DateTime`을 사용합니다.
//! - 명단 필드는 [`Roster`](crate::domain::models::roster::Roster) 타입으로, 중복이 저장될 수 없습니다.

pub mod users;
pub mod clubs;
pub mod events;
pub mod feedback;

pub use users::{User, UserRole};
pub use clubs::Club;
pub use events::Event;
pub use feedback::Feedback;
