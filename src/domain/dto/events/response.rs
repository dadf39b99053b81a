use serde::{Deserialize, Serialize};
use crate::domain::entities::events::Event;
use crate::utils::time_utils::to_rfc3339;

/// 이벤트 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub club: String,
    pub created_by: Option<String>,
    pub attendees: Vec<String>,
    pub attendee_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        let attendee_count = event.attendee_count();

        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            attendees: event.attendees.to_hex_vec(),
            attendee_count,
            title: event.title,
            description: event.description,
            date: to_rfc3339(&event.date),
            location: event.location,
            club: event.club_id.to_hex(),
            created_by: event.created_by.map(|id| id.to_hex()),
            created_at: to_rfc3339(&event.created_at),
            updated_at: to_rfc3339(&event.updated_at),
        }
    }
}
