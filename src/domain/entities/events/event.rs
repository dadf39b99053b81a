//! Event Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::roster::Roster;

/// 이벤트 엔티티
///
/// `club_id`는 강한 참조로, 클럽이 삭제되면 이벤트도 삭제됩니다.
/// `created_by`는 약한 참조로, 작성자가 삭제되면 `None`이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub date: DateTime,
    pub location: String,
    pub club_id: ObjectId,
    #[serde(default)]
    pub created_by: Option<ObjectId>,
    #[serde(default)]
    pub attendees: Roster,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime,
    pub location: String,
    pub club_id: ObjectId,
    pub created_by: Option<ObjectId>,
}

impl Event {
    pub fn new(values: NewEvent) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title: values.title,
            description: values.description,
            date: values.date,
            location: values.location,
            club_id: values.club_id,
            created_by: values.created_by,
            attendees: Roster::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}

/// 이벤트 부분 수정 값. 참석자 명단은 포함되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime>,
    pub location: Option<String>,
    pub club_id: Option<ObjectId>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.club_id.is_none()
    }

    pub fn apply(&self, event: &mut Event) {
        if let Some(v) = &self.title {
            event.title = v.clone();
        }
        if let Some(v) = &self.description {
            event.description = v.clone();
        }
        if let Some(v) = self.date {
            event.date = v;
        }
        if let Some(v) = &self.location {
            event.location = v.clone();
        }
        if let Some(v) = self.club_id {
            event.club_id = v;
        }
        event.updated_at = DateTime::now();
    }
}
