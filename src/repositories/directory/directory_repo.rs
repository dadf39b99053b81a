//! # 클럽/이벤트/피드백 리포지토리 (MongoDB)
//!
//! 명단 변경은 조건부 단일 문서 업데이트 하나로 처리합니다.
//!
//! ```text
//! 가입:  filter { _id, members: { $ne: uid } }  update { $push: { members: uid } }
//! 탈퇴:  filter { _id, members: uid }           update { $pull: { members: uid } }
//! ```
//!
//! `matched_count == 0`이면 문서 존재 여부를 한 번 더 확인해서
//! `Unchanged`(이미 그 상태)와 `MissingOwner`(문서 없음)를 구분합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use crate::core::errors::{AppError, AppResult};
use crate::db::{collections, Database};
use crate::domain::entities::clubs::{Club, ClubChanges};
use crate::domain::entities::events::{Event, EventChanges};
use crate::domain::entities::feedback::Feedback;
use crate::repositories::ports::{
    ClubFilter, DirectoryStore, EventFilter, RosterChange, RosterOutcome, RosterTarget,
};
use crate::utils::string_utils::escape_regex;

pub struct DirectoryRepository {
    db: Arc<Database>,
}

impl DirectoryRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn clubs(&self) -> Collection<Club> {
        self.db.collection::<Club>(collections::CLUBS)
    }

    fn events(&self) -> Collection<Event> {
        self.db.collection::<Event>(collections::EVENTS)
    }

    fn feedback(&self) -> Collection<Feedback> {
        self.db.collection::<Feedback>(collections::FEEDBACK)
    }

    /// 참조 조회용 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let event_indexes = [
            IndexModel::builder()
                .keys(doc! { "club_id": 1, "date": 1 })
                .options(IndexOptions::builder().name("club_date".to_string()).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "attendees": 1 })
                .options(IndexOptions::builder().name("attendees".to_string()).build())
                .build(),
        ];
        self.events().create_indexes(event_indexes).await?;

        self.clubs()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "members": 1 })
                    .options(IndexOptions::builder().name("members".to_string()).build())
                    .build(),
            )
            .await?;

        self.feedback()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "club_id": 1, "created_at": 1 })
                    .options(IndexOptions::builder().name("club_created_at".to_string()).build())
                    .build(),
            )
            .await?;

        Ok(())
    }

    fn inserted_id(id: Bson, resource: &str) -> AppResult<ObjectId> {
        id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!("삽입된 {} ID를 확인할 수 없습니다", resource))
        })
    }

    fn club_not_found() -> AppError {
        AppError::NotFound("클럽을 찾을 수 없습니다".to_string())
    }

    async fn club_exists(&self, club_id: &ObjectId) -> AppResult<bool> {
        Ok(self.clubs().count_documents(doc! { "_id": club_id }).limit(1).await? > 0)
    }

    fn after_update() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    pub(crate) fn club_filter_document(filter: &ClubFilter) -> Document {
        let mut query = doc! {};

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = escape_regex(search);
            query.insert(
                "$or",
                vec![
                    doc! { "name": { "$regex": &pattern, "$options": "i" } },
                    doc! { "description": { "$regex": &pattern, "$options": "i" } },
                    doc! { "category": { "$regex": &pattern, "$options": "i" } },
                ],
            );
        }

        if let Some(category) = filter.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = format!("^{}$", escape_regex(category));
            query.insert("category", doc! { "$regex": pattern, "$options": "i" });
        }

        query
    }

    pub(crate) fn club_set_document(changes: &ClubChanges) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };
        let text_fields = [
            ("name", &changes.name),
            ("description", &changes.description),
            ("image", &changes.image),
            ("category", &changes.category),
            ("meeting_time", &changes.meeting_time),
            ("location", &changes.location),
            ("email", &changes.email),
        ];
        for (field, value) in text_fields {
            if let Some(v) = value {
                set.insert(field, v.as_str());
            }
        }
        if let Some(admin_id) = changes.admin_id {
            set.insert("admin_id", admin_id);
        }
        set
    }

    pub(crate) fn event_set_document(changes: &EventChanges) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(v) = &changes.title {
            set.insert("title", v.as_str());
        }
        if let Some(v) = &changes.description {
            set.insert("description", v.as_str());
        }
        if let Some(v) = changes.date {
            set.insert("date", v);
        }
        if let Some(v) = &changes.location {
            set.insert("location", v.as_str());
        }
        if let Some(v) = changes.club_id {
            set.insert("club_id", v);
        }
        set
    }

    /// 명단 변경용 (filter, update) 쌍
    pub(crate) fn roster_update(field: &str, owner: &ObjectId, user_id: &ObjectId, change: RosterChange) -> (Document, Document) {
        match change {
            RosterChange::Insert => (
                doc! { "_id": owner, field: { "$ne": user_id } },
                doc! { "$push": { field: user_id }, "$set": { "updated_at": DateTime::now() } },
            ),
            RosterChange::Remove => (
                doc! { "_id": owner, field: user_id },
                doc! { "$pull": { field: user_id }, "$set": { "updated_at": DateTime::now() } },
            ),
        }
    }
}

#[async_trait]
impl DirectoryStore for DirectoryRepository {
    async fn insert_club(&self, mut club: Club) -> AppResult<Club> {
        let result = self.clubs().insert_one(&club).await?;
        club.id = Some(Self::inserted_id(result.inserted_id, "클럽")?);
        Ok(club)
    }

    async fn find_club(&self, id: &ObjectId) -> AppResult<Option<Club>> {
        Ok(self.clubs().find_one(doc! { "_id": id }).await?)
    }

    async fn list_clubs(&self, filter: &ClubFilter) -> AppResult<Vec<Club>> {
        let cursor = self
            .clubs()
            .find(Self::club_filter_document(filter))
            .sort(doc! { "name": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_club(&self, id: &ObjectId, changes: &ClubChanges) -> AppResult<Option<Club>> {
        Ok(self
            .clubs()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": Self::club_set_document(changes) })
            .with_options(Self::after_update())
            .await?)
    }

    async fn delete_club(&self, id: &ObjectId) -> AppResult<bool> {
        let deleted = self.clubs().delete_one(doc! { "_id": id }).await?;
        if deleted.deleted_count == 0 {
            return Ok(false);
        }

        let events = self.events().delete_many(doc! { "club_id": id }).await?;
        let feedback = self.feedback().delete_many(doc! { "club_id": id }).await?;

        log::info!(
            "🗑️ 클럽 삭제: {} (이벤트 {}개, 피드백 {}개 함께 삭제)",
            id.to_hex(),
            events.deleted_count,
            feedback.deleted_count
        );

        Ok(true)
    }

    async fn insert_event(&self, mut event: Event) -> AppResult<Event> {
        let result = self.events().insert_one(&event).await?;
        let id = Self::inserted_id(result.inserted_id, "이벤트")?;

        // delete_club은 클럽을 먼저 지우고 소속 문서를 지우므로, 삽입 후 클럽이 남아 있으면 고아가 될 수 없습니다.
        if !self.club_exists(&event.club_id).await? {
            self.events().delete_one(doc! { "_id": id }).await?;
            log::warn!("클럽 삭제와 경합한 이벤트 삽입 취소: {}", event.club_id.to_hex());
            return Err(Self::club_not_found());
        }

        event.id = Some(id);
        Ok(event)
    }

    async fn find_event(&self, id: &ObjectId) -> AppResult<Option<Event>> {
        Ok(self.events().find_one(doc! { "_id": id }).await?)
    }

    async fn list_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let query = match filter.club_id {
            Some(club_id) => doc! { "club_id": club_id },
            None => doc! {},
        };

        let cursor = self.events().find(query).sort(doc! { "date": 1 }).await?;

        Ok(cursor.try_collect().await?)
    }

    async fn update_event(&self, id: &ObjectId, changes: &EventChanges) -> AppResult<Option<Event>> {
        let updated = self
            .events()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": Self::event_set_document(changes) })
            .with_options(Self::after_update())
            .await?;

        // 옮겨 간 클럽이 그 사이 삭제됐다면 연쇄 삭제가 했을 일을 마저 합니다.
        if let (Some(club_id), Some(_)) = (changes.club_id.as_ref(), updated.as_ref()) {
            if !self.club_exists(club_id).await? {
                self.events().delete_one(doc! { "_id": id }).await?;
                log::warn!("클럽 삭제와 경합한 이벤트 이동 취소: {}", club_id.to_hex());
                return Err(Self::club_not_found());
            }
        }

        Ok(updated)
    }

    async fn delete_event(&self, id: &ObjectId) -> AppResult<bool> {
        let deleted = self.events().delete_one(doc! { "_id": id }).await?;
        Ok(deleted.deleted_count > 0)
    }

    async fn update_roster(
        &self,
        target: RosterTarget,
        user_id: &ObjectId,
        change: RosterChange,
    ) -> AppResult<RosterOutcome> {
        let (collection_name, field, owner) = match target {
            RosterTarget::ClubMembers(id) => (collections::CLUBS, "members", id),
            RosterTarget::EventAttendees(id) => (collections::EVENTS, "attendees", id),
        };
        let collection = self.db.collection::<Document>(collection_name);

        let (filter, update) = Self::roster_update(field, &owner, user_id, change);
        let result = collection.update_one(filter, update).await?;

        if result.matched_count > 0 {
            return Ok(RosterOutcome::Applied);
        }

        let exists = collection.count_documents(doc! { "_id": owner }).await? > 0;
        Ok(if exists {
            RosterOutcome::Unchanged
        } else {
            RosterOutcome::MissingOwner
        })
    }

    async fn insert_feedback(&self, mut feedback: Feedback) -> AppResult<Feedback> {
        let result = self.feedback().insert_one(&feedback).await?;
        let id = Self::inserted_id(result.inserted_id, "피드백")?;

        if !self.club_exists(&feedback.club_id).await? {
            self.feedback().delete_one(doc! { "_id": id }).await?;
            log::warn!("클럽 삭제와 경합한 피드백 삽입 취소: {}", feedback.club_id.to_hex());
            return Err(Self::club_not_found());
        }

        feedback.id = Some(id);
        Ok(feedback)
    }

    async fn list_feedback(&self, club_id: &ObjectId) -> AppResult<Vec<Feedback>> {
        let cursor = self
            .feedback()
            .find(doc! { "club_id": club_id })
            .sort(doc! { "created_at": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn detach_user(&self, user_id: &ObjectId) -> AppResult<()> {
        let now = DateTime::now();

        self.clubs()
            .update_many(
                doc! { "admin_id": user_id },
                doc! { "$set": { "admin_id": Bson::Null, "updated_at": now } },
            )
            .await?;
        self.clubs()
            .update_many(
                doc! { "members": user_id },
                doc! { "$pull": { "members": user_id }, "$set": { "updated_at": now } },
            )
            .await?;
        self.events()
            .update_many(
                doc! { "created_by": user_id },
                doc! { "$set": { "created_by": Bson::Null, "updated_at": now } },
            )
            .await?;
        self.events()
            .update_many(
                doc! { "attendees": user_id },
                doc! { "$pull": { "attendees": user_id }, "$set": { "updated_at": now } },
            )
            .await?;
        self.feedback().delete_many(doc! { "user_id": user_id }).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_filter_escapes_search_term() {
        let filter = ClubFilter {
            search: Some(" c++ ".to_string()),
            category: Some("Strategy".to_string()),
        };

        let query = DirectoryRepository::club_filter_document(&filter);
        let or = query.get_array("$or").unwrap();
        assert_eq!(or.len(), 3);

        let name = or[0].as_document().unwrap().get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), r"c\+\+");
        assert_eq!(name.get_str("$options").unwrap(), "i");

        let category = query.get_document("category").unwrap();
        assert_eq!(category.get_str("$regex").unwrap(), "^Strategy$");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let query = DirectoryRepository::club_filter_document(&ClubFilter {
            search: Some("   ".to_string()),
            category: None,
        });
        assert!(query.is_empty());
    }

    #[test]
    fn test_roster_insert_is_guarded_by_ne() {
        let owner = ObjectId::new();
        let user = ObjectId::new();

        let (filter, update) =
            DirectoryRepository::roster_update("members", &owner, &user, RosterChange::Insert);
        assert_eq!(
            filter.get_document("members").unwrap().get_object_id("$ne").unwrap(),
            user
        );
        assert!(update.contains_key("$push"));

        let (filter, update) =
            DirectoryRepository::roster_update("attendees", &owner, &user, RosterChange::Remove);
        assert_eq!(filter.get_object_id("attendees").unwrap(), user);
        assert!(update.contains_key("$pull"));
    }

    #[test]
    fn test_club_set_document_keeps_members_untouched() {
        let changes = ClubChanges {
            name: Some("Chess Club".to_string()),
            ..Default::default()
        };
        let set = DirectoryRepository::club_set_document(&changes);
        assert_eq!(set.get_str("name").unwrap(), "Chess Club");
        assert!(!set.contains_key("members"));
        assert!(!set.contains_key("admin_id"));
    }
}
