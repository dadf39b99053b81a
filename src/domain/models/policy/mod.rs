//! # Authorization Policy
//!
//! 누가 어떤 리소스에 어떤 작업을 할 수 있는지 결정하는 순수 함수 모음입니다.
//! 저장소나 HTTP에 의존하지 않으므로 서비스 계층과 테스트에서 그대로 호출합니다.
//!
//! ## 규칙 요약
//!
//! | 리소스 | 작업 | 허용 대상 |
//! |--------|------|-----------|
//! | User | Create | 익명 포함 모두 |
//! | User | Delete | ADMIN |
//! | User | 그 외 | 인증된 사용자 |
//! | Club | Create / Update / Delete | ADMIN |
//! | Club | Join | STUDENT |
//! | Club | Leave / List / Retrieve | 인증된 사용자 |
//! | Event | Create / Update / Delete | EVENT_ADMIN |
//! | Event | Register / Unregister / List / Retrieve | 인증된 사용자 |
//! | Feedback | Create / List | 인증된 사용자 |
//!
//! 익명 요청이 거부되면 `Unauthenticated`(401), 역할 때문에 거부되면
//! `Forbidden`(403)이 됩니다. 표에 없는 조합은 모두 `Forbidden`입니다.

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::user::UserRole;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 요청된 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Retrieve,
    List,
    Update,
    Delete,
    Join,
    Leave,
    Register,
    Unregister,
}

/// 작업 대상 리소스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Club,
    Event,
    Feedback,
}

/// 거부 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// 인증 정보가 없음
    Unauthenticated,
    /// 인증되었지만 역할이 맞지 않음
    Forbidden,
}

/// 정책 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// 요구되는 최소 조건
enum Requirement {
    Anyone,
    Authenticated,
    Role(UserRole),
    Never,
}

fn requirement(action: Action, resource: ResourceKind) -> Requirement {
    use Action::*;

    match (resource, action) {
        (ResourceKind::User, Create) => Requirement::Anyone,
        (ResourceKind::User, Delete) => Requirement::Role(UserRole::Admin),
        (ResourceKind::User, Retrieve | List | Update) => Requirement::Authenticated,

        (ResourceKind::Club, Create | Update | Delete) => Requirement::Role(UserRole::Admin),
        (ResourceKind::Club, Join) => Requirement::Role(UserRole::Student),
        (ResourceKind::Club, Leave | List | Retrieve) => Requirement::Authenticated,

        (ResourceKind::Event, Create | Update | Delete) => Requirement::Role(UserRole::EventAdmin),
        (ResourceKind::Event, Register | Unregister | List | Retrieve) => Requirement::Authenticated,

        (ResourceKind::Feedback, Create | List) => Requirement::Authenticated,

        _ => Requirement::Never,
    }
}

/// 작업 허용 여부를 판정합니다.
///
/// ```rust,ignore
/// let decision = decide(Some(&student), Action::Create, ResourceKind::Club);
/// assert_eq!(decision, Decision::Deny(DenyReason::Forbidden));
/// ```
pub fn decide(actor: Option<&AuthenticatedUser>, action: Action, resource: ResourceKind) -> Decision {
    let requirement = requirement(action, resource);

    if matches!(requirement, Requirement::Anyone) {
        return Decision::Allow;
    }

    let Some(actor) = actor else {
        return Decision::Deny(DenyReason::Unauthenticated);
    };

    match requirement {
        Requirement::Anyone | Requirement::Authenticated => Decision::Allow,
        Requirement::Role(role) if actor.role == role => Decision::Allow,
        Requirement::Role(_) | Requirement::Never => Decision::Deny(DenyReason::Forbidden),
    }
}

/// 정책을 적용하고 거부 시 알맞은 `AppError`를 반환합니다.
pub fn enforce(actor: Option<&AuthenticatedUser>, action: Action, resource: ResourceKind) -> AppResult<()> {
    match decide(actor, action, resource) {
        Decision::Allow => Ok(()),
        Decision::Deny(DenyReason::Unauthenticated) => {
            log::warn!("🚫 익명 요청 거부: {:?} {:?}", action, resource);
            Err(AppError::AuthenticationError("인증이 필요합니다".to_string()))
        }
        Decision::Deny(DenyReason::Forbidden) => {
            let actor_desc = actor
                .map(|a| format!("{} ({})", a.user_id.to_hex(), a.role.as_str()))
                .unwrap_or_default();
            log::warn!("🚫 권한 거부: {} → {:?} {:?}", actor_desc, action, resource);
            Err(AppError::ForbiddenError(forbidden_message(action, resource)))
        }
    }
}

fn forbidden_message(action: Action, resource: ResourceKind) -> String {
    match requirement(action, resource) {
        Requirement::Role(role) => format!("{} 권한이 필요한 작업입니다", role.as_str()),
        _ => "허용되지 않은 작업입니다".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn actor(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: ObjectId::new(),
            email: format!("{}@test.com", role.as_str().to_lowercase()),
            role,
        }
    }

    #[test]
    fn test_club_mutations_require_admin() {
        let admin = actor(UserRole::Admin);
        let student = actor(UserRole::Student);
        let event_admin = actor(UserRole::EventAdmin);

        for action in [Action::Create, Action::Update, Action::Delete] {
            assert_eq!(decide(Some(&admin), action, ResourceKind::Club), Decision::Allow);
            assert_eq!(
                decide(Some(&student), action, ResourceKind::Club),
                Decision::Deny(DenyReason::Forbidden)
            );
            assert_eq!(
                decide(Some(&event_admin), action, ResourceKind::Club),
                Decision::Deny(DenyReason::Forbidden)
            );
        }
    }

    #[test]
    fn test_club_join_is_student_only() {
        assert!(decide(Some(&actor(UserRole::Student)), Action::Join, ResourceKind::Club).is_allowed());
        assert_eq!(
            decide(Some(&actor(UserRole::Admin)), Action::Join, ResourceKind::Club),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_club_leave_allows_any_authenticated_user() {
        for role in [UserRole::Student, UserRole::Admin, UserRole::EventAdmin] {
            assert!(decide(Some(&actor(role)), Action::Leave, ResourceKind::Club).is_allowed());
        }
    }

    #[test]
    fn test_event_mutations_require_event_admin() {
        let event_admin = actor(UserRole::EventAdmin);
        let admin = actor(UserRole::Admin);

        for action in [Action::Create, Action::Update, Action::Delete] {
            assert!(decide(Some(&event_admin), action, ResourceKind::Event).is_allowed());
            assert_eq!(
                decide(Some(&admin), action, ResourceKind::Event),
                Decision::Deny(DenyReason::Forbidden)
            );
        }
    }

    #[test]
    fn test_event_registration_open_to_authenticated_users() {
        let student = actor(UserRole::Student);
        assert!(decide(Some(&student), Action::Register, ResourceKind::Event).is_allowed());
        assert!(decide(Some(&student), Action::Unregister, ResourceKind::Event).is_allowed());
    }

    #[test]
    fn test_anonymous_only_allowed_to_register_account() {
        assert!(decide(None, Action::Create, ResourceKind::User).is_allowed());
        assert_eq!(
            decide(None, Action::List, ResourceKind::User),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            decide(None, Action::List, ResourceKind::Club),
            Decision::Deny(DenyReason::Unauthenticated)
        );
        assert_eq!(
            decide(None, Action::Create, ResourceKind::Club),
            Decision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn test_user_delete_requires_admin() {
        assert!(decide(Some(&actor(UserRole::Admin)), Action::Delete, ResourceKind::User).is_allowed());
        assert_eq!(
            decide(Some(&actor(UserRole::Student)), Action::Delete, ResourceKind::User),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert!(decide(Some(&actor(UserRole::Student)), Action::Update, ResourceKind::User).is_allowed());
    }

    #[test]
    fn test_unknown_combinations_are_forbidden() {
        let admin = actor(UserRole::Admin);
        assert_eq!(
            decide(Some(&admin), Action::Join, ResourceKind::Event),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert_eq!(
            decide(Some(&admin), Action::Delete, ResourceKind::Feedback),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_enforce_maps_denials_to_errors() {
        let student = actor(UserRole::Student);
        assert!(matches!(
            enforce(Some(&student), Action::Create, ResourceKind::Club),
            Err(AppError::ForbiddenError(_))
        ));
        assert!(matches!(
            enforce(None, Action::Retrieve, ResourceKind::Event),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(enforce(Some(&student), Action::Join, ResourceKind::Club).is_ok());
    }
}
