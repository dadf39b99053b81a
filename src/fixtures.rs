//! 개발용 테스트 데이터
//!
//! 계정 3개(ADMIN, EVENT_ADMIN, STUDENT), 클럽 3개, 클럽마다 워크숍 이벤트 1개를 만듭니다.
//! 이미 있는 계정/클럽/이벤트는 건너뛰므로 여러 번 실행해도 안전합니다.
//!
//! 테스트 계정 비밀번호는 알려진 짧은 값이므로 비밀번호 정책을 적용하지 않습니다.
//! 운영 환경에서는 실행하지 마세요.

use std::sync::Arc;
use log::info;
use mongodb::bson::oid::ObjectId;
use crate::bootstrap::Stores;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::clubs::{Club, NewClub};
use crate::domain::entities::events::{Event, NewEvent};
use crate::domain::entities::users::{User, UserRole};
use crate::repositories::ports::{ClubFilter, DirectoryStore, EventFilter, UserStore};
use crate::services::auth::CredentialVerifier;
use crate::services::users::{NewAccount, UserService};
use crate::utils::time_utils::days_from_now;

struct AccountSeed {
    email: &'static str,
    password: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    role: UserRole,
}

const ACCOUNTS: [AccountSeed; 3] = [
    AccountSeed {
        email: "admin@test.com",
        password: "admin123",
        first_name: "Admin",
        last_name: "User",
        role: UserRole::Admin,
    },
    AccountSeed {
        email: "eventadmin@test.com",
        password: "event123",
        first_name: "Event",
        last_name: "Admin",
        role: UserRole::EventAdmin,
    },
    AccountSeed {
        email: "student@test.com",
        password: "student123",
        first_name: "Student",
        last_name: "User",
        role: UserRole::Student,
    },
];

struct ClubSeed {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    meeting_time: &'static str,
    location: &'static str,
    email: &'static str,
}

const CLUBS: [ClubSeed; 3] = [
    ClubSeed {
        name: "Amogh Club",
        description: "Photography club for enthusiasts",
        category: "Photography",
        meeting_time: "Every Saturday, 3:00 PM",
        location: "Media Center",
        email: "amogh@club.com",
    },
    ClubSeed {
        name: "Natraj Club",
        description: "Dance club for all styles",
        category: "Dance",
        meeting_time: "Tuesday & Thursday, 5:00 PM",
        location: "Dance Studio",
        email: "natraj@club.com",
    },
    ClubSeed {
        name: "Ameya Club",
        description: "Gaming and esports club",
        category: "Gaming",
        meeting_time: "Friday, 4:00 PM",
        location: "Gaming Arena",
        email: "ameya@club.com",
    },
];

/// 적재 결과 (새로 만든 개수)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub clubs: usize,
    pub events: usize,
}

pub struct Seeder {
    users: Arc<dyn UserStore>,
    directory: Arc<dyn DirectoryStore>,
    accounts: UserService,
}

impl Seeder {
    pub fn new(stores: &Stores, hasher: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            users: stores.users.clone(),
            directory: stores.directory.clone(),
            accounts: UserService::new(stores.users.clone(), stores.directory.clone(), hasher),
        }
    }

    pub async fn run(&self) -> AppResult<SeedReport> {
        let mut report = SeedReport::default();

        let mut ids = Vec::with_capacity(ACCOUNTS.len());
        for seed in &ACCOUNTS {
            let (user, created) = self.ensure_account(seed).await?;
            if created {
                report.users += 1;
            }
            ids.push(user.id.ok_or_else(|| {
                AppError::InternalError(format!("{} 계정 ID가 없습니다", seed.email))
            })?);
        }
        let (admin_id, event_admin_id) = (ids[0], ids[1]);

        for seed in &CLUBS {
            let (club, created) = self.ensure_club(seed, admin_id).await?;
            if created {
                report.clubs += 1;
            }
            if self.ensure_workshop(&club, event_admin_id).await? {
                report.events += 1;
            }
        }

        info!(
            "🌱 테스트 데이터 적재 완료: 사용자 {}명, 클럽 {}개, 이벤트 {}개 생성",
            report.users, report.clubs, report.events
        );
        Ok(report)
    }

    async fn ensure_account(&self, seed: &AccountSeed) -> AppResult<(User, bool)> {
        if let Some(existing) = self.users.find_by_email(seed.email).await? {
            return Ok((existing, false));
        }

        let user = self
            .accounts
            .provision_user(NewAccount {
                email: seed.email.to_string(),
                password: seed.password.to_string(),
                first_name: seed.first_name.to_string(),
                last_name: seed.last_name.to_string(),
                role: seed.role,
            })
            .await?;
        Ok((user, true))
    }

    async fn ensure_club(&self, seed: &ClubSeed, admin_id: ObjectId) -> AppResult<(Club, bool)> {
        let filter = ClubFilter {
            search: Some(seed.name.to_string()),
            category: Some(seed.category.to_string()),
        };
        if let Some(existing) = self
            .directory
            .list_clubs(&filter)
            .await?
            .into_iter()
            .find(|club| club.name == seed.name)
        {
            return Ok((existing, false));
        }

        let club = Club::new(NewClub {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            image: format!("https://placehold.co/600x400?text={}", seed.name.replace(' ', "+")),
            category: seed.category.to_string(),
            meeting_time: seed.meeting_time.to_string(),
            location: seed.location.to_string(),
            email: seed.email.to_string(),
            admin_id: Some(admin_id),
        });
        Ok((self.directory.insert_club(club).await?, true))
    }

    async fn ensure_workshop(&self, club: &Club, event_admin_id: ObjectId) -> AppResult<bool> {
        let club_id = club
            .id
            .ok_or_else(|| AppError::InternalError(format!("{} 클럽 ID가 없습니다", club.name)))?;
        let title = format!("{} Workshop", club.name);

        let existing = self
            .directory
            .list_events(&EventFilter { club_id: Some(club_id) })
            .await?;
        if existing.iter().any(|event| event.title == title) {
            return Ok(false);
        }

        self.directory
            .insert_event(Event::new(NewEvent {
                title,
                description: format!("Introductory workshop for {}", club.name),
                date: days_from_now(7),
                location: club.location.clone(),
                club_id,
                created_by: Some(event_admin_id),
            }))
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::BcryptVerifier;

    #[actix_web::test]
    async fn test_seed_is_idempotent() {
        let stores = Stores::in_memory();
        let seeder = Seeder::new(&stores, Arc::new(BcryptVerifier::new(4)));

        let first = seeder.run().await.unwrap();
        assert_eq!(first, SeedReport { users: 3, clubs: 3, events: 3 });

        let second = seeder.run().await.unwrap();
        assert_eq!(second, SeedReport::default());

        let admin = stores.users.find_by_email("admin@test.com").await.unwrap().unwrap();
        let clubs = stores.directory.list_clubs(&ClubFilter::default()).await.unwrap();
        assert_eq!(clubs.len(), 3);
        assert!(clubs.iter().all(|club| club.admin_id == admin.id));

        let events = stores.directory.list_events(&EventFilter::default()).await.unwrap();
        assert!(events.iter().any(|event| event.title == "Natraj Club Workshop"));

        let student = stores.users.find_by_email("student@test.com").await.unwrap().unwrap();
        assert_eq!(student.role, UserRole::Student);
    }
}
