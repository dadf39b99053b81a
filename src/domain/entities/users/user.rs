//! User Entity Implementation
//!
//! 사용자 엔티티와 역할 열거형입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 저장 및 API 표현은 `STUDENT`, `ADMIN`, `EVENT_ADMIN` 문자열입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Student,
    Admin,
    EventAdmin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Admin => "ADMIN",
            UserRole::EventAdmin => "EVENT_ADMIN",
        }
    }

    /// 대소문자를 구분하지 않고 역할 이름을 해석합니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "STUDENT" => Some(UserRole::Student),
            "ADMIN" => Some(UserRole::Admin),
            "EVENT_ADMIN" => Some(UserRole::EventAdmin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_active() -> bool {
    true
}

/// 사용자 엔티티
///
/// 이메일은 저장 전에 공백 제거 및 소문자화되며, 시스템 전체에서 유일합니다.
/// 비밀번호는 bcrypt 해시로만 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 정규화된 이메일 (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt 해시
    pub password_hash: String,
    #[serde(default)]
    pub role: UserRole,
    /// 계정 활성화 여부. 비활성 계정은 로그인할 수 없습니다.
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    pub fn new(
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            first_name,
            last_name,
            password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// 사용자 부분 수정 값. 이메일은 바꿀 수 없습니다.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
    /// 이미 해시된 새 비밀번호
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
            && self.password_hash.is_none()
            && self.is_active.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(v) = &self.first_name {
            user.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            user.last_name = v.clone();
        }
        if let Some(v) = self.role {
            user.role = v;
        }
        if let Some(v) = &self.password_hash {
            user.password_hash = v.clone();
        }
        if let Some(v) = self.is_active {
            user.is_active = v;
        }
        user.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&UserRole::EventAdmin).unwrap(), "\"EVENT_ADMIN\"");
        assert_eq!(serde_json::from_str::<UserRole>("\"STUDENT\"").unwrap(), UserRole::Student);
        assert_eq!(UserRole::parse("event_admin"), Some(UserRole::EventAdmin));
        assert_eq!(UserRole::parse("teacher"), None);
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn test_new_user_is_active_without_id() {
        let user = User::new(
            "ada@test.com".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "hash".to_string(),
            UserRole::Student,
        );

        assert!(user.id.is_none());
        assert!(user.is_active);
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
