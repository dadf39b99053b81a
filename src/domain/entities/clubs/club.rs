//! Club Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::roster::Roster;

/// 클럽 엔티티
///
/// `admin_id`는 약한 참조입니다. 관리자 계정이 삭제되면 `None`이 되고 클럽은 남습니다.
/// `members`는 가입/탈퇴를 통해서만 바뀝니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    /// 대표 이미지 URL
    pub image: String,
    pub category: String,
    /// 모임 일정 (자유 형식)
    pub meeting_time: String,
    pub location: String,
    /// 연락용 이메일
    pub email: String,
    #[serde(default)]
    pub admin_id: Option<ObjectId>,
    #[serde(default)]
    pub members: Roster,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// 클럽 생성에 필요한 값
#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub meeting_time: String,
    pub location: String,
    pub email: String,
    pub admin_id: Option<ObjectId>,
}

impl Club {
    pub fn new(values: NewClub) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name: values.name,
            description: values.description,
            image: values.image,
            category: values.category,
            meeting_time: values.meeting_time,
            location: values.location,
            email: values.email,
            admin_id: values.admin_id,
            members: Roster::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// 이름, 설명, 카테고리 중 하나라도 `needle`(소문자)을 포함하는지 확인
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// 부분 수정 값. `None`인 필드는 그대로 둡니다. 회원 명단은 포함되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct ClubChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub meeting_time: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub admin_id: Option<ObjectId>,
}

impl ClubChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.category.is_none()
            && self.meeting_time.is_none()
            && self.location.is_none()
            && self.email.is_none()
            && self.admin_id.is_none()
    }

    pub fn apply(&self, club: &mut Club) {
        if let Some(v) = &self.name {
            club.name = v.clone();
        }
        if let Some(v) = &self.description {
            club.description = v.clone();
        }
        if let Some(v) = &self.image {
            club.image = v.clone();
        }
        if let Some(v) = &self.category {
            club.category = v.clone();
        }
        if let Some(v) = &self.meeting_time {
            club.meeting_time = v.clone();
        }
        if let Some(v) = &self.location {
            club.location = v.clone();
        }
        if let Some(v) = &self.email {
            club.email = v.clone();
        }
        if let Some(v) = self.admin_id {
            club.admin_id = Some(v);
        }
        club.updated_at = DateTime::now();
    }
}
