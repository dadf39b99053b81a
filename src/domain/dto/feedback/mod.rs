//! 피드백 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::feedback::Feedback;
use crate::utils::time_utils::to_rfc3339;

/// 피드백 작성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(length(min = 1, max = 2000, message = "피드백은 1-2000자 사이여야 합니다"))]
    pub content: String,
}

/// 피드백 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub user: String,
    pub club: String,
    pub content: String,
    pub created_at: String,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            id: feedback.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: feedback.user_id.to_hex(),
            club: feedback.club_id.to_hex(),
            content: feedback.content,
            created_at: to_rfc3339(&feedback.created_at),
        }
    }
}
