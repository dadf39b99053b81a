//! 이벤트 관리 서비스
//!
//! 생성/수정/삭제는 EVENT_ADMIN 전용입니다. 이벤트는 반드시 존재하는 클럽에 속합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::{CreateEventRequest, UpdateEventRequest};
use crate::domain::entities::events::{Event, NewEvent};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::policy::{enforce, Action, ResourceKind};
use crate::repositories::ports::{DirectoryStore, EventFilter};
use crate::utils::string_utils::{parse_object_id, parse_reference_id, validate_required_string};
use crate::utils::time_utils::parse_rfc3339;

pub struct EventService {
    directory: Arc<dyn DirectoryStore>,
}

impl EventService {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self { directory }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    async fn ensure_club_exists(&self, club_id: &ObjectId) -> AppResult<()> {
        if self.directory.find_club(club_id).await?.is_none() {
            return Err(AppError::NotFound("클럽을 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }

    /// 이벤트를 생성합니다. 작성자는 요청자로 기록됩니다.
    pub async fn create(&self, actor: &AuthenticatedUser, request: CreateEventRequest) -> AppResult<Event> {
        enforce(Some(actor), Action::Create, ResourceKind::Event)?;
        request.validate()?;

        let club_id = parse_reference_id(&request.club, "club")?;
        let date = parse_rfc3339(&request.date, "date")?;
        self.ensure_club_exists(&club_id).await?;

        let event = Event::new(NewEvent {
            title: validate_required_string(&request.title, "title")?,
            description: validate_required_string(&request.description, "description")?,
            date,
            location: validate_required_string(&request.location, "location")?,
            club_id,
            created_by: Some(actor.user_id),
        });

        let created = self.directory.insert_event(event).await?;
        log::info!("📅 이벤트 생성: {} (by {})", created.title, actor.email);
        Ok(created)
    }

    pub async fn get(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<Event> {
        enforce(Some(actor), Action::Retrieve, ResourceKind::Event)?;
        let id = parse_object_id(id, "이벤트")?;

        self.directory
            .find_event(&id)
            .await?
            .ok_or_else(|| AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()))
    }

    /// 이벤트 목록 (일시순). `club`을 주면 해당 클럽의 이벤트만 반환합니다.
    pub async fn list(&self, actor: &AuthenticatedUser, club: Option<&str>) -> AppResult<Vec<Event>> {
        enforce(Some(actor), Action::List, ResourceKind::Event)?;

        let club_id = club
            .map(|raw| parse_reference_id(raw, "club"))
            .transpose()?;
        self.directory.list_events(&EventFilter { club_id }).await
    }

    /// 한 클럽의 이벤트 목록. 클럽이 없으면 `NotFound`.
    pub async fn list_for_club(&self, actor: &AuthenticatedUser, club_id: &str) -> AppResult<Vec<Event>> {
        enforce(Some(actor), Action::List, ResourceKind::Event)?;
        let club_id = parse_object_id(club_id, "클럽")?;
        self.ensure_club_exists(&club_id).await?;

        self.directory
            .list_events(&EventFilter { club_id: Some(club_id) })
            .await
    }

    pub async fn update(&self, actor: &AuthenticatedUser, id: &str, request: UpdateEventRequest) -> AppResult<Event> {
        enforce(Some(actor), Action::Update, ResourceKind::Event)?;
        let id = parse_object_id(id, "이벤트")?;
        request.validate()?;

        let changes = request.into_changes()?;
        if let Some(club_id) = changes.club_id.as_ref() {
            self.ensure_club_exists(club_id).await?;
        }

        let updated = self
            .directory
            .update_event(&id, &changes)
            .await?
            .ok_or_else(|| AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()))?;

        log::info!("✏️ 이벤트 수정: {} (by {})", updated.title, actor.email);
        Ok(updated)
    }

    pub async fn delete(&self, actor: &AuthenticatedUser, id: &str) -> AppResult<()> {
        enforce(Some(actor), Action::Delete, ResourceKind::Event)?;
        let id = parse_object_id(id, "이벤트")?;

        if !self.directory.delete_event(&id).await? {
            return Err(AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()));
        }

        log::info!("🗑️ 이벤트 삭제: {} (by {})", id.to_hex(), actor.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::services::testing::Fixture;

    #[actix_web::test]
    async fn test_create_requires_existing_club() {
        let fx = Fixture::new();
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;

        let result = fx
            .event_service()
            .create(&event_admin, Fixture::event_request("Kickoff", &ObjectId::new().to_hex()))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_only_event_admin_mutates() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let club_id = fx.club(&admin, "Chess Club").await;

        let result = fx
            .event_service()
            .create(&admin, Fixture::event_request("Kickoff", &club_id))
            .await;
        assert!(matches!(result, Err(AppError::ForbiddenError(_))));
    }

    #[actix_web::test]
    async fn test_denied_update_and_delete_leave_event_untouched() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let (student, _) = fx.account("student@test.com", UserRole::Student).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let event_id = fx.event(&event_admin, "Kickoff", &club_id).await;
        let service = fx.event_service();
        let before = service.get(&admin, &event_id).await.unwrap();

        for actor in [&student, &admin] {
            let rename = UpdateEventRequest {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            };
            assert!(matches!(
                service.update(actor, &event_id, rename).await,
                Err(AppError::ForbiddenError(_))
            ));
            assert!(matches!(
                service.delete(actor, &event_id).await,
                Err(AppError::ForbiddenError(_))
            ));
        }

        let after = fx.directory.find_event(&before.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(after.title, "Kickoff");
        assert_eq!(after.club_id, before.club_id);
        assert_eq!(after.date, before.date);
        assert_eq!(after.updated_at, before.updated_at);
        assert_eq!(after.created_by, Some(event_admin.user_id));
    }

    #[actix_web::test]
    async fn test_create_update_list_delete() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (event_admin, _) = fx.account("events@test.com", UserRole::EventAdmin).await;
        let chess = fx.club(&admin, "Chess Club").await;
        let drama = fx.club(&admin, "Drama Club").await;
        let service = fx.event_service();

        let kickoff = service
            .create(&event_admin, Fixture::event_request("Kickoff", &chess))
            .await
            .unwrap();
        assert_eq!(kickoff.created_by, Some(event_admin.user_id));

        let bad_date = UpdateEventRequest {
            date: Some("tomorrow".to_string()),
            ..Default::default()
        };
        let kickoff_id = kickoff.id.unwrap().to_hex();
        assert!(matches!(
            service.update(&event_admin, &kickoff_id, bad_date).await,
            Err(AppError::ValidationError(_))
        ));

        let moved = UpdateEventRequest {
            club: Some(drama.clone()),
            ..Default::default()
        };
        service.update(&event_admin, &kickoff_id, moved).await.unwrap();

        assert!(service.list_for_club(&admin, &chess).await.unwrap().is_empty());
        assert_eq!(service.list(&admin, Some(&drama)).await.unwrap().len(), 1);
        assert_eq!(service.list(&admin, None).await.unwrap().len(), 1);

        service.delete(&event_admin, &kickoff_id).await.unwrap();
        assert!(matches!(
            service.get(&admin, &kickoff_id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
