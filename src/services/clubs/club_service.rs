//! 클럽 관리 서비스
//!
//! 생성/수정/삭제는 ADMIN 전용이고 조회는 인증된 모든 사용자에게 열려 있습니다.
//! 회원 명단은 여기서 바꾸지 않습니다 ([`MembershipService`](crate::services::membership::MembershipService) 참고).

use std::sync::Arc;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::{ClubQuery, CreateClubRequest, UpdateClubRequest};
use crate::domain::entities::clubs::{Club, NewClub};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::policy::{enforce, Action, ResourceKind};
use crate::repositories::ports::{ClubFilter, DirectoryStore, UserStore};
use crate::utils::string_utils::{parse_object_id, parse_reference_id, validate_required_string};

pub struct ClubService {
    directory: Arc<dyn DirectoryStore>,
    users: Arc<dyn UserStore>,
}

impl ClubService {
    pub fn new(directory: Arc<dyn DirectoryStore>, users: Arc<dyn UserStore>) -> Self {
        Self { directory, users }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    async fn ensure_user_exists(&self, id: &mongodb::bson::oid::ObjectId) -> AppResult<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::ValidationError(
                "admin으로 지정한 사용자가 존재하지 않습니다".to_string(),
            ));
        }
        Ok(())
    }

    /// 클럽을 생성합니다. `admin`을 생략하면 요청자가 관리자가 됩니다.
    pub async fn create(&self, actor: &AuthenticatedUser, request: CreateClubRequest) -> AppResult<Club> {
        enforce(Some(actor), Action::Create, ResourceKind::Club)?;
        request.validate()?;

        let admin_id = match request.admin.as_deref() {
            Some(raw) => {
                let id = parse_reference_id(raw, "admin")?;
                self.ensure_user_exists(&id).await?;
                id
            }
            None => actor.user_id,
        };

        let club = Club::new(NewClub {
            name: validate_required_string(&request.name, "name")?,
            description: validate_required_string(&request.description, "description")?,
            image: request.image.trim().to_string(),
            category: validate_required_string(&request.category, "category")?,
            meeting_time: validate_required_string(&request.meeting_time, "meeting_time")?,
            location: validate_required_string(&request.location, "location")?,
            email: request.email.trim().to_string(),
            admin_id: Some(admin_id),
        });

        let created = self.directory.insert_club(club).await?;
        log::info!("🏫 클럽 생성: {} (by {})", created.name, actor.email);
        Ok(created)
    }

    pub async fn get(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<Club> {
        enforce(Some(actor), Action::Retrieve, ResourceKind::Club)?;
        let id = parse_object_id(id, "클럽")?;

        self.directory
            .find_club(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("클럽을 찾을 수 없습니다".to_string()))
    }

    pub async fn list(&self, actor: &AuthenticatedUser, query: ClubQuery) -> AppResult<Vec<Club>> {
        enforce(Some(actor), Action::List, ResourceKind::Club)?;

        let filter = ClubFilter {
            search: query.search,
            category: query.category,
        };
        self.directory.list_clubs(&filter).await
    }

    pub async fn update(&self, actor: &AuthenticatedUser, id: &str, request: UpdateClubRequest) -> AppResult<Club> {
        enforce(Some(actor), Action::Update, ResourceKind::Club)?;
        let id = parse_object_id(id, "클럽")?;
        request.validate()?;

        let changes = request.into_changes()?;
        if let Some(admin_id) = changes.admin_id.as_ref() {
            self.ensure_user_exists(admin_id).await?;
        }

        let updated = self
            .directory
            .update_club(&id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("클럽을 찾을 수 없습니다".to_string()))?;

        log::info!("✏️ 클럽 수정: {} (by {})", updated.name, actor.email);
        Ok(updated)
    }

    /// 클럽과 소속 이벤트, 피드백을 삭제합니다.
    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<()> {
        enforce(Some(actor), Action::Delete, ResourceKind::Club)?;
        let id = parse_object_id(id, "클럽")?;

        if !self.directory.delete_club(&id).await? {
            return Err(AppError::NotFound("클럽을 찾을 수 없습니다".to_string()));
        }

        log::info!("🗑️ 클럽 삭제: {} (by {})", id.to_hex(), actor.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::repositories::ports::EventFilter;
    use crate::services::testing::Fixture;

    #[actix_web::test]
    async fn test_admin_defaults_to_creator() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;

        let club = fx
            .club_service()
            .create(&admin, Fixture::club_request("Chess Club"))
            .await
            .unwrap();

        assert_eq!(club.admin_id, Some(admin.user_id));
        assert_eq!(club.member_count(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_admin_rejected() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;

        let mut request = Fixture::club_request("Chess Club");
        request.admin = Some(mongodb::bson::oid::ObjectId::new().to_hex());

        let result = fx.club_service().create(&admin, request).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_non_admin_mutations_forbidden_and_store_unchanged() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let service = fx.club_service();
        let club = service.create(&admin, Fixture::club_request("Chess Club")).await.unwrap();
        let club_id = club.id.unwrap().to_hex();

        for role in [UserRole::Student, UserRole::EventAdmin] {
            let (actor, _) = fx.account(&format!("{}@test.com", role.as_str().to_lowercase()), role).await;

            let create = service.create(&actor, Fixture::club_request("Rogue Club")).await;
            assert!(matches!(create, Err(AppError::ForbiddenError(_))));

            let update = UpdateClubRequest {
                name: Some("Renamed".to_string()),
                ..Default::default()
            };
            assert!(matches!(
                service.update(&actor, &club_id, update).await,
                Err(AppError::ForbiddenError(_))
            ));
            assert!(matches!(
                service.delete(&actor, &club_id).await,
                Err(AppError::ForbiddenError(_))
            ));
        }

        let clubs = service.list(&admin, ClubQuery::default()).await.unwrap();
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].name, "Chess Club");
    }

    #[actix_web::test]
    async fn test_partial_update_and_search() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let service = fx.club_service();
        let club = service.create(&admin, Fixture::club_request("Chess Club")).await.unwrap();
        service.create(&admin, Fixture::club_request("Drama Club")).await.unwrap();

        let update = UpdateClubRequest {
            category: Some("Strategy".to_string()),
            ..Default::default()
        };
        let updated = service
            .update(&admin, &club.id.unwrap().to_hex(), update)
            .await
            .unwrap();
        assert_eq!(updated.category, "Strategy");
        assert_eq!(updated.name, "Chess Club");

        let found = service
            .list(&admin, ClubQuery { search: Some("strat".to_string()), category: None })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chess Club");
    }

    #[actix_web::test]
    async fn test_delete_cascades_to_events() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;

        let club = fx
            .club_service()
            .create(&admin, Fixture::club_request("Chess Club"))
            .await
            .unwrap();
        let club_id = club.id.unwrap().to_hex();
        fx.event_service()
            .create(&event_admin, Fixture::event_request("Kickoff", &club_id))
            .await
            .unwrap();

        fx.club_service().delete(&admin, &club_id).await.unwrap();

        assert!(fx.directory.list_events(&EventFilter::default()).await.unwrap().is_empty());
        assert!(matches!(
            fx.club_service().get(&admin, &club_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_not_found() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;

        assert!(matches!(
            fx.club_service().get(&admin, "not-an-id").await,
            Err(AppError::NotFound(_))
        ));
    }
}
