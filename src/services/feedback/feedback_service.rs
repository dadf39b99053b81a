use std::sync::Arc;
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::domain::dto::SubmitFeedbackRequest;
use crate::domain::entities::feedback::Feedback;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::policy::{enforce, Action, ResourceKind};
use crate::repositories::ports::DirectoryStore;
use crate::utils::string_utils::{parse_object_id, validate_required_string};

/// 클럽 피드백 서비스
pub struct FeedbackService {
    directory: Arc<dyn DirectoryStore>,
}

impl FeedbackService {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self { directory }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    async fn ensure_club(&self, club_id: &str) -> AppResult<mongodb::bson::oid::ObjectId> {
        let club_id = parse_object_id(club_id, "클럽")?;
        if self.directory.find_club(&club_id).await?.is_none() {
            return Err(AppError::NotFound("클럽을 찾을 수 없습니다".to_string()));
        }
        Ok(club_id)
    }

    pub async fn submit(&self, actor: &AuthenticatedUser, club_id: &str, request: SubmitFeedbackRequest) -> AppResult<Feedback> {
        enforce(Some(actor), Action::Create, ResourceKind::Feedback)?;
        request.validate()?;
        let club_id = self.ensure_club(club_id).await?;

        let content = validate_required_string(&request.content, "content")?;
        self.directory
            .insert_feedback(Feedback::new(actor.user_id, club_id, content))
            .await
    }

    pub async fn list(&self, actor: &AuthenticatedUser, club_id: &str) -> AppResult<Vec<Feedback>> {
        enforce(Some(actor), Action::List, ResourceKind::Feedback)?;
        let club_id = self.ensure_club(club_id).await?;

        self.directory.list_feedback(&club_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use crate::services::testing::Fixture;

    #[actix_web::test]
    async fn test_submit_and_list() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let (student, _) = fx.account("s@test.com", UserRole::Student).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let service = fx.feedback_service();

        let request = SubmitFeedbackRequest { content: "  Great openings lesson ".to_string() };
        let saved = service.submit(&student, &club_id, request).await.unwrap();
        assert_eq!(saved.content, "Great openings lesson");
        assert_eq!(saved.user_id, student.user_id);

        let listed = service.list(&admin, &club_id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[actix_web::test]
    async fn test_rejects_empty_and_unknown_club() {
        let fx = Fixture::new();
        let (admin, _) = fx.account("admin@test.com", UserRole::Admin).await;
        let club_id = fx.club(&admin, "Chess Club").await;
        let service = fx.feedback_service();

        let empty = service
            .submit(&admin, &club_id, SubmitFeedbackRequest { content: String::new() })
            .await;
        assert!(matches!(empty, Err(AppError::ValidationError(_))));

        let missing = service
            .list(&admin, &mongodb::bson::oid::ObjectId::new().to_hex())
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
