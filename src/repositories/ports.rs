//! # 저장소 포트
//!
//! 서비스 계층이 의존하는 저장소 인터페이스입니다. MongoDB 구현과 인메모리 구현이
//! 같은 trait을 구현하므로 서비스는 어떤 백엔드가 연결되었는지 알지 못합니다.
//!
//! ```text
//! UserService ────────▶ dyn UserStore      ◀── UserRepository (MongoDB + Redis)
//!                                          ◀── MemoryUserStore
//!
//! ClubService ───┐
//! EventService ──┼────▶ dyn DirectoryStore ◀── DirectoryRepository (MongoDB)
//! Membership ────┤                         ◀── MemoryDirectoryStore
//! FeedbackService┘
//! ```

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppResult;
use crate::domain::entities::clubs::{Club, ClubChanges};
use crate::domain::entities::events::{Event, EventChanges};
use crate::domain::entities::feedback::Feedback;
use crate::domain::entities::users::{User, UserChanges};

/// 사용자 저장소
///
/// 이메일은 호출자가 정규화해서 넘깁니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 새 사용자를 저장합니다. 이메일이 이미 있으면 `DuplicateError`.
    async fn insert(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 가입 순으로 정렬된 전체 사용자
    async fn list(&self) -> AppResult<Vec<User>>;

    /// 부분 수정 후 수정된 사용자를 반환합니다. 없으면 `None`.
    async fn update(&self, id: &ObjectId, changes: &UserChanges) -> AppResult<Option<User>>;

    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// 클럽 목록 조건
#[derive(Debug, Clone, Default)]
pub struct ClubFilter {
    /// 이름, 설명, 카테고리 부분 일치 (대소문자 무시)
    pub search: Option<String>,
    /// 카테고리 정확히 일치 (대소문자 무시)
    pub category: Option<String>,
}

/// 이벤트 목록 조건
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub club_id: Option<ObjectId>,
}

/// 변경할 명단
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterTarget {
    ClubMembers(ObjectId),
    EventAttendees(ObjectId),
}

/// 명단 변경 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Insert,
    Remove,
}

/// 명단 변경 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOutcome {
    /// 명단이 바뀜
    Applied,
    /// 이미 원하는 상태라서 바뀌지 않음 (이미 있음 / 원래 없음)
    Unchanged,
    /// 클럽 또는 이벤트가 존재하지 않음
    MissingOwner,
}

/// 클럽, 이벤트, 피드백 저장소
///
/// 명단 변경(`update_roster`)은 확인과 쓰기가 하나의 원자적 연산이어야 합니다.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn insert_club(&self, club: Club) -> AppResult<Club>;

    async fn find_club(&self, id: &ObjectId) -> AppResult<Option<Club>>;

    async fn list_clubs(&self, filter: &ClubFilter) -> AppResult<Vec<Club>>;

    async fn update_club(&self, id: &ObjectId, changes: &ClubChanges) -> AppResult<Option<Club>>;

    /// 클럽을 삭제하고 소속 이벤트와 피드백도 함께 삭제합니다.
    async fn delete_club(&self, id: &ObjectId) -> AppResult<bool>;

    /// 소속 클럽이 없으면 (삭제와 경합한 경우 포함) `NotFound`이며 이벤트는 남지 않습니다.
    async fn insert_event(&self, event: Event) -> AppResult<Event>;

    async fn find_event(&self, id: &ObjectId) -> AppResult<Option<Event>>;

    /// 일시 오름차순
    async fn list_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>>;

    async fn update_event(&self, id: &ObjectId, changes: &EventChanges) -> AppResult<Option<Event>>;

    async fn delete_event(&self, id: &ObjectId) -> AppResult<bool>;

    async fn update_roster(
        &self,
        target: RosterTarget,
        user_id: &ObjectId,
        change: RosterChange,
    ) -> AppResult<RosterOutcome>;

    /// 대상 클럽이 없으면 `NotFound`이며 피드백은 남지 않습니다.
    async fn insert_feedback(&self, feedback: Feedback) -> AppResult<Feedback>;

    /// 작성 시각 오름차순
    async fn list_feedback(&self, club_id: &ObjectId) -> AppResult<Vec<Feedback>>;

    /// 삭제되는 사용자에 대한 모든 참조를 정리합니다.
    ///
    /// - 클럽 관리자 / 이벤트 작성자 참조는 `None`으로
    /// - 모든 회원/참석자 명단에서 제거
    /// - 작성한 피드백 삭제
    async fn detach_user(&self, user_id: &ObjectId) -> AppResult<()>;
}
