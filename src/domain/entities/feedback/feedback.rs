use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 클럽에 대한 사용자 피드백
///
/// 작성자나 클럽이 삭제되면 함께 삭제됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub club_id: ObjectId,
    pub content: String,
    pub created_at: DateTime,
}

impl Feedback {
    pub fn new(user_id: ObjectId, club_id: ObjectId, content: String) -> Self {
        Self {
            id: None,
            user_id,
            club_id,
            content,
            created_at: DateTime::now(),
        }
    }
}
