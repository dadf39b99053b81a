//! 서비스 테스트용 인메모리 구성

use std::sync::Arc;
use crate::domain::dto::{CreateClubRequest, CreateEventRequest};
use crate::domain::entities::users::{User, UserRole};
use crate::domain::models::auth::AuthenticatedUser;
use crate::repositories::memory::{MemoryDirectoryStore, MemoryUserStore};
use crate::services::auth::credential::BcryptVerifier;
use crate::services::clubs::ClubService;
use crate::services::events::EventService;
use crate::services::feedback::FeedbackService;
use crate::services::membership::MembershipService;
use crate::services::users::{NewAccount, UserService};
use crate::utils::time_utils::{days_from_now, to_rfc3339};

pub(crate) struct Fixture {
    pub users: Arc<MemoryUserStore>,
    pub directory: Arc<MemoryDirectoryStore>,
    hasher: Arc<BcryptVerifier>,
}

impl Fixture {
    pub const PASSWORD: &'static str = "fixture-pass-1";

    pub fn new() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            directory: Arc::new(MemoryDirectoryStore::new()),
            hasher: Arc::new(BcryptVerifier::new(4)),
        }
    }

    pub fn user_service(&self) -> UserService {
        UserService::new(self.users.clone(), self.directory.clone(), self.hasher.clone())
    }

    pub fn club_service(&self) -> ClubService {
        ClubService::new(self.directory.clone(), self.users.clone())
    }

    pub fn event_service(&self) -> EventService {
        EventService::new(self.directory.clone())
    }

    pub fn membership(&self) -> MembershipService {
        MembershipService::new(self.directory.clone())
    }

    pub fn feedback_service(&self) -> FeedbackService {
        FeedbackService::new(self.directory.clone())
    }

    /// 계정을 만들고 요청 주체와 저장된 사용자를 돌려줍니다.
    pub async fn account(&self, email: &str, role: UserRole) -> (AuthenticatedUser, User) {
        let user = self
            .user_service()
            .create_user(NewAccount {
                email: email.to_string(),
                password: Self::PASSWORD.to_string(),
                first_name: "Test".to_string(),
                last_name: role.as_str().to_string(),
                role,
            })
            .await
            .unwrap();

        let actor = AuthenticatedUser {
            user_id: user.id.unwrap(),
            email: user.email.clone(),
            role,
        };
        (actor, user)
    }

    pub fn club_request(name: &str) -> CreateClubRequest {
        CreateClubRequest {
            name: name.to_string(),
            description: format!("{} meets weekly", name),
            image: "https://img.test/club.png".to_string(),
            category: "Games".to_string(),
            meeting_time: "Monday 6pm".to_string(),
            location: "Room 101".to_string(),
            email: "club@test.com".to_string(),
            admin: None,
        }
    }

    pub fn event_request(title: &str, club_id: &str) -> CreateEventRequest {
        CreateEventRequest {
            title: title.to_string(),
            description: format!("{} description", title),
            date: to_rfc3339(&days_from_now(7)),
            location: "Main Hall".to_string(),
            club: club_id.to_string(),
        }
    }

    /// 클럽을 만들고 ID 문자열을 돌려줍니다.
    pub async fn club(&self, admin: &AuthenticatedUser, name: &str) -> String {
        self.club_service()
            .create(admin, Self::club_request(name))
            .await
            .unwrap()
            .id
            .unwrap()
            .to_hex()
    }

    pub async fn event(&self, event_admin: &AuthenticatedUser, title: &str, club_id: &str) -> String {
        self.event_service()
            .create(event_admin, Self::event_request(title, club_id))
            .await
            .unwrap()
            .id
            .unwrap()
            .to_hex()
    }
}
