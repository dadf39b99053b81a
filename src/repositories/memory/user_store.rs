use std::collections::BTreeMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{User, UserChanges};
use crate::repositories::ports::UserStore;

/// 프로세스 메모리 사용자 저장소
///
/// 목록은 MongoDB 저장소와 같이 `created_at` 오름차순입니다. 같은 시각이면 ID 순입니다.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<ObjectId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, BTreeMap<ObjectId, User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.write()?;

        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateError("이미 사용 중인 이메일입니다".to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.read()?.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        users.sort_by_key(|user| (user.created_at, user.id));
        Ok(users)
    }

    async fn update(&self, id: &ObjectId, changes: &UserChanges) -> AppResult<Option<User>> {
        let mut users = self.write()?;

        Ok(users.get_mut(id).map(|user| {
            changes.apply(user);
            user.clone()
        }))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.write()?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;
    use crate::domain::entities::users::UserRole;

    fn user(email: &str) -> User {
        User::new(
            email.to_string(),
            "Test".to_string(),
            "User".to_string(),
            "hash".to_string(),
            UserRole::Student,
        )
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        store.insert(user("dup@test.com")).await.unwrap();

        let result = store.insert(user("dup@test.com")).await;
        assert!(matches!(result, Err(AppError::DuplicateError(_))));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_list_in_insertion_order() {
        let store = MemoryUserStore::new();
        for email in ["a@test.com", "b@test.com", "c@test.com"] {
            store.insert(user(email)).await.unwrap();
        }

        let emails: Vec<String> = store.list().await.unwrap().into_iter().map(|u| u.email).collect();
        assert_eq!(emails, vec!["a@test.com", "b@test.com", "c@test.com"]);
    }

    #[actix_web::test]
    async fn test_list_follows_created_at_not_id() {
        let store = MemoryUserStore::new();
        let mut late = user("late@test.com");
        late.created_at = DateTime::from_millis(2_000_000);
        let mut early = user("early@test.com");
        early.created_at = DateTime::from_millis(1_000_000);

        store.insert(late).await.unwrap();
        store.insert(early).await.unwrap();

        let emails: Vec<String> = store.list().await.unwrap().into_iter().map(|u| u.email).collect();
        assert_eq!(emails, vec!["early@test.com", "late@test.com"]);
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let store = MemoryUserStore::new();
        let created = store.insert(user("x@test.com")).await.unwrap();
        let id = created.id.unwrap();

        let changes = UserChanges {
            is_active: Some(false),
            ..Default::default()
        };
        let updated = store.update(&id, &changes).await.unwrap().unwrap();
        assert!(!updated.is_active);

        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.update(&id, &changes).await.unwrap().is_none());
    }
}
