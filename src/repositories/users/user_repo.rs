//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 주 저장소로 사용하고, Redis가 연결되어 있으면
//! id/이메일 조회 결과를 10분간 캐싱합니다 (cache-aside).
//!
//! ## 캐시 키
//!
//! - `user:{id}` - ID 조회
//! - `user:email:{email}` - 이메일 조회
//!
//! 캐시 오류는 경고 로그만 남기고 무시합니다. 수정/삭제 시 두 키를 모두 무효화합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use crate::caching::redis::RedisCache;
use crate::config::CacheConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, Database};
use crate::domain::entities::users::{User, UserChanges};
use crate::repositories::ports::UserStore;

pub struct UserRepository {
    db: Arc<Database>,

    cache: Option<Arc<RedisCache>>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>, cache: Option<Arc<RedisCache>>) -> Self {
        Self { db, cache }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(collections::USERS)
    }

    fn id_key(id: &ObjectId) -> String {
        format!("user:{}", id.to_hex())
    }

    fn email_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    /// 이메일 유니크 인덱스와 가입일 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(IndexOptions::builder().name("created_at_asc".to_string()).build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await?;

        Ok(())
    }

    async fn cached(&self, key: &str) -> Option<User> {
        let cache = self.cache.as_ref()?;
        match cache.get_json::<User>(key).await {
            Ok(hit) => hit,
            Err(e) => {
                log::warn!("⚠️ 사용자 캐시 조회 실패 ({}): {}", key, e);
                None
            }
        }
    }

    async fn store_in_cache(&self, user: &User) {
        let (Some(cache), Some(id)) = (self.cache.as_ref(), user.id.as_ref()) else {
            return;
        };

        for key in [Self::id_key(id), Self::email_key(&user.email)] {
            if let Err(e) = cache
                .put_json(&key, user, CacheConfig::USER_TTL_SECONDS)
                .await
            {
                log::warn!("⚠️ 사용자 캐시 저장 실패 ({}): {}", key, e);
            }
        }
    }

    async fn invalidate(&self, user: &User) {
        let (Some(cache), Some(id)) = (self.cache.as_ref(), user.id.as_ref()) else {
            return;
        };

        let keys = vec![Self::id_key(id), Self::email_key(&user.email)];
        if let Err(e) = cache.evict(&keys).await {
            log::warn!("⚠️ 사용자 캐시 무효화 실패: {}", e);
        }
    }

    fn set_document(changes: &UserChanges) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(v) = &changes.first_name {
            set.insert("first_name", v.as_str());
        }
        if let Some(v) = &changes.last_name {
            set.insert("last_name", v.as_str());
        }
        if let Some(v) = changes.role {
            set.insert("role", v.as_str());
        }
        if let Some(v) = &changes.password_hash {
            set.insert("password_hash", v.as_str());
        }
        if let Some(v) = changes.is_active {
            set.insert("is_active", v);
        }
        set
    }
}

/// MongoDB 중복 키 에러(E11000) 여부
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn insert(&self, mut user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::DuplicateError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::DuplicateError("이미 사용 중인 이메일입니다".to_string())
            } else {
                AppError::from(e)
            }
        })?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(user)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        if let Some(hit) = self.cached(&Self::id_key(id)).await {
            return Ok(Some(hit));
        }

        let user = self.collection().find_one(doc! { "_id": id }).await?;

        if let Some(ref user) = user {
            self.store_in_cache(user).await;
        }

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        if let Some(hit) = self.cached(&Self::email_key(email)).await {
            return Ok(Some(hit));
        }

        let user = self.collection().find_one(doc! { "email": email }).await?;

        if let Some(ref user) = user {
            self.store_in_cache(user).await;
        }

        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update(&self, id: &ObjectId, changes: &UserChanges) -> AppResult<Option<User>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": Self::set_document(changes) })
            .with_options(options)
            .await?;

        if let Some(ref user) = updated {
            self.invalidate(user).await;
        }

        Ok(updated)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let removed = self
            .collection()
            .find_one_and_delete(doc! { "_id": id })
            .await?;

        match removed {
            Some(user) => {
                self.invalidate(&user).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;

    #[test]
    fn test_cache_keys() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(UserRepository::id_key(&id), "user:507f1f77bcf86cd799439011");
        assert_eq!(UserRepository::email_key("a@test.com"), "user:email:a@test.com");
    }

    #[test]
    fn test_set_document_contains_only_changed_fields() {
        let changes = UserChanges {
            first_name: Some("Grace".to_string()),
            role: Some(UserRole::EventAdmin),
            ..Default::default()
        };

        let set = UserRepository::set_document(&changes);
        assert_eq!(set.get_str("first_name").unwrap(), "Grace");
        assert_eq!(set.get_str("role").unwrap(), "EVENT_ADMIN");
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("last_name"));
        assert!(!set.contains_key("password_hash"));
    }
}
