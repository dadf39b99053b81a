use serde::{Deserialize, Serialize};
use crate::domain::entities::clubs::Club;
use crate::utils::time_utils::to_rfc3339;

/// 클럽 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub meeting_time: String,
    pub location: String,
    pub email: String,
    /// 클럽 관리자 ID (관리자 계정이 삭제되면 null)
    pub admin: Option<String>,
    pub members: Vec<String>,
    pub member_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        let member_count = club.member_count();

        Self {
            id: club.id.map(|id| id.to_hex()).unwrap_or_default(),
            members: club.members.to_hex_vec(),
            member_count,
            name: club.name,
            description: club.description,
            image: club.image,
            category: club.category,
            meeting_time: club.meeting_time,
            location: club.location,
            email: club.email,
            admin: club.admin_id.map(|id| id.to_hex()),
            created_at: to_rfc3339(&club.created_at),
            updated_at: to_rfc3339(&club.updated_at),
        }
    }
}
