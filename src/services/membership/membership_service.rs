//! # 멤버십 코디네이터
//!
//! 클럽 가입/탈퇴와 이벤트 참가 신청/취소를 처리합니다.
//!
//! | 작업 | 권한 | 이미 그 상태일 때 |
//! |------|------|-------------------|
//! | `join_club` | STUDENT | 성공 (변화 없음) |
//! | `leave_club` | 인증 사용자 | `StateConflictError` "not a member" |
//! | `register_for_event` | 인증 사용자 | `StateConflictError` "already registered" |
//! | `unregister_from_event` | 인증 사용자 | `StateConflictError` "not registered" |
//!
//! 확인과 변경은 저장소의 `update_roster` 한 번으로 원자적으로 이루어집니다.
//! 클럽/이벤트가 없으면 `NotFound`입니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::entities::clubs::Club;
use crate::domain::entities::events::Event;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::policy::{enforce, Action, ResourceKind};
use crate::repositories::ports::{DirectoryStore, RosterChange, RosterOutcome, RosterTarget};
use crate::utils::string_utils::parse_object_id;

pub struct MembershipService {
    directory: Arc<dyn DirectoryStore>,
}

impl MembershipService {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self { directory }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    async fn club_after(&self, club_id: &mongodb::bson::oid::ObjectId) -> AppResult<Club> {
        self.directory
            .find_club(club_id)
            .await?
            .ok_or_else(|| AppError::NotFound("클럽을 찾을 수 없습니다".to_string()))
    }

    async fn event_after(&self, event_id: &mongodb::bson::oid::ObjectId) -> AppResult<Event> {
        self.directory
            .find_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()))
    }

    /// 클럽에 가입합니다. 이미 회원이면 아무 일도 하지 않고 성공합니다.
    pub async fn join_club(&self, actor: &AuthenticatedUser, club_id: &str) -> AppResult<Club> {
        enforce(Some(actor), Action::Join, ResourceKind::Club)?;
        let club_id = parse_object_id(club_id, "클럽")?;

        let outcome = self
            .directory
            .update_roster(RosterTarget::ClubMembers(club_id), &actor.user_id, RosterChange::Insert)
            .await?;

        match outcome {
            RosterOutcome::Applied => log::info!("➕ 클럽 가입: {} → {}", actor.email, club_id.to_hex()),
            RosterOutcome::Unchanged => log::debug!("이미 가입된 클럽: {} → {}", actor.email, club_id.to_hex()),
            RosterOutcome::MissingOwner => {
                return Err(AppError::NotFound("클럽을 찾을 수 없습니다".to_string()));
            }
        }

        self.club_after(&club_id).await
    }

    pub async fn leave_club(&self, actor: &AuthenticatedUser, club_id: &str) -> AppResult<Club> {
        enforce(Some(actor), Action::Leave, ResourceKind::Club)?;
        let club_id = parse_object_id(club_id, "클럽")?;

        let outcome = self
            .directory
            .update_roster(RosterTarget::ClubMembers(club_id), &actor.user_id, RosterChange::Remove)
            .await?;

        match outcome {
            RosterOutcome::Applied => log::info!("➖ 클럽 탈퇴: {} ← {}", actor.email, club_id.to_hex()),
            RosterOutcome::Unchanged => {
                return Err(AppError::StateConflictError("not a member".to_string()));
            }
            RosterOutcome::MissingOwner => {
                return Err(AppError::NotFound("클럽을 찾을 수 없습니다".to_string()));
            }
        }

        self.club_after(&club_id).await
    }

    pub async fn register_for_event(&self, actor: &AuthenticatedUser, event_id: &str) -> AppResult<Event> {
        enforce(Some(actor), Action::Register, ResourceKind::Event)?;
        let event_id = parse_object_id(event_id, "이벤트")?;

        let outcome = self
            .directory
            .update_roster(RosterTarget::EventAttendees(event_id), &actor.user_id, RosterChange::Insert)
            .await?;

        match outcome {
            RosterOutcome::Applied => log::info!("🎟️ 이벤트 참가 신청: {} → {}", actor.email, event_id.to_hex()),
            RosterOutcome::Unchanged => {
                return Err(AppError::StateConflictError("already registered".to_string()));
            }
            RosterOutcome::MissingOwner => {
                return Err(AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()));
            }
        }

        self.event_after(&event_id).await
    }

    pub async fn unregister_from_event(&self, actor: &AuthenticatedUser, event_id: &str) -> AppResult<Event> {
        enforce(Some(actor), Action::Unregister, ResourceKind::Event)?;
        let event_id = parse_object_id(event_id, "이벤트")?;

        let outcome = self
            .directory
            .update_roster(RosterTarget::EventAttendees(event_id), &actor.user_id, RosterChange::Remove)
            .await?;

        match outcome {
            RosterOutcome::Applied => log::info!("↩️ 이벤트 참가 취소: {} ← {}", actor.email, event_id.to_hex()),
            RosterOutcome::Unchanged => {
                return Err(AppError::StateConflictError("not registered".to_string()));
            }
            RosterOutcome::MissingOwner => {
                return Err(AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()));
            }
        }

        self.event_after(&event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::services::testing::Fixture;

    #[actix_web::test]
    async fn test_chess_club_join_then_leave() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (student_a, _) = fx.account("a@test.com", UserRole::Student).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let membership = fx.membership();

        let joined = membership.join_club(&student_a, &club_id).await.unwrap();
        assert!(joined.members.contains(&student_a.user_id));

        let again = membership.join_club(&student_a, &club_id).await.unwrap();
        assert_eq!(again.member_count(), 1);

        let left = membership.leave_club(&student_a, &club_id).await.unwrap();
        assert!(left.members.is_empty());

        assert!(matches!(
            membership.leave_club(&student_a, &club_id).await,
            Err(AppError::StateConflictError(msg)) if msg == "not a member"
        ));
    }

    #[actix_web::test]
    async fn test_join_is_student_only() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let club_id = fx.club(&admin, "Chess Club").await;

        for actor in [&admin, &event_admin] {
            assert!(matches!(
                fx.membership().join_club(actor, &club_id).await,
                Err(AppError::ForbiddenError(_))
            ));
        }
    }

    #[actix_web::test]
    async fn test_kickoff_register_twice_conflicts() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let (student_b, _) = fx.account("b@test.com", UserRole::Student).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let event_id = fx.event(&event_admin, "Kickoff", &club_id).await;
        let membership = fx.membership();

        let registered = membership.register_for_event(&student_b, &event_id).await.unwrap();
        assert_eq!(registered.attendee_count(), 1);

        assert!(matches!(
            membership.register_for_event(&student_b, &event_id).await,
            Err(AppError::StateConflictError(msg)) if msg == "already registered"
        ));

        let unregistered = membership.unregister_from_event(&student_b, &event_id).await.unwrap();
        assert!(unregistered.attendees.is_empty());
    }

    #[actix_web::test]
    async fn test_register_then_unregister_restores_existing_attendees() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let (student_a, _) = fx.account("a@test.com", UserRole::Student).await;
        let (student_b, _) = fx.account("b@test.com", UserRole::Student).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let event_id = fx.event(&event_admin, "Kickoff", &club_id).await;
        let membership = fx.membership();

        let before = membership.register_for_event(&student_a, &event_id).await.unwrap();

        let during = membership.register_for_event(&student_b, &event_id).await.unwrap();
        assert_eq!(during.attendee_count(), 2);

        let after = membership.unregister_from_event(&student_b, &event_id).await.unwrap();
        assert_eq!(after.attendees, before.attendees);
        assert!(after.attendees.contains(&student_a.user_id));
        assert!(!after.attendees.contains(&student_b.user_id));
    }

    #[actix_web::test]
    async fn test_unregister_non_attendee_conflicts() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let event_id = fx.event(&event_admin, "Kickoff", &club_id).await;

        assert!(matches!(
            fx.membership().unregister_from_event(&admin, &event_id).await,
            Err(AppError::StateConflictError(msg)) if msg == "not registered"
        ));
    }

    #[actix_web::test]
    async fn test_missing_targets_are_not_found() {
        let fx = Fixture::new();
        let (student, _) = fx.account("s@test.com", UserRole::Student).await;
        let missing = mongodb::bson::oid::ObjectId::new().to_hex();
        let membership = fx.membership();

        assert!(matches!(membership.join_club(&student, &missing).await, Err(AppError::NotFound(_))));
        assert!(matches!(membership.leave_club(&student, &missing).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            membership.register_for_event(&student, &missing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            membership.unregister_from_event(&student, "garbage").await,
            Err(AppError::NotFound(_))
        ));
    }
}
