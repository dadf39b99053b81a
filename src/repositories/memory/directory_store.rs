use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::clubs::{Club, ClubChanges};
use crate::domain::entities::events::{Event, EventChanges};
use crate::domain::entities::feedback::Feedback;
use crate::repositories::ports::{
    ClubFilter, DirectoryStore, EventFilter, RosterChange, RosterOutcome, RosterTarget,
};

#[derive(Default)]
struct Tables {
    clubs: BTreeMap<ObjectId, Club>,
    events: BTreeMap<ObjectId, Event>,
    feedback: BTreeMap<ObjectId, Feedback>,
}

/// 프로세스 메모리 클럽/이벤트/피드백 저장소
///
/// 세 테이블을 하나의 잠금으로 보호하므로 연쇄 삭제와 명단 변경이 원자적입니다.
#[derive(Default)]
pub struct MemoryDirectoryStore {
    tables: RwLock<Tables>,
}

impl MemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> AppResult<R> {
        let tables = self
            .tables
            .read()
            .map_err(|_| AppError::InternalError("디렉터리 저장소 잠금 실패".to_string()))?;
        Ok(f(&tables))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::InternalError("디렉터리 저장소 잠금 실패".to_string()))
    }
}

fn club_not_found() -> AppError {
    AppError::NotFound("클럽을 찾을 수 없습니다".to_string())
}

fn apply_roster(roster: &mut crate::domain::models::roster::Roster, user_id: &ObjectId, change: RosterChange) -> bool {
    match change {
        RosterChange::Insert => roster.insert(*user_id),
        RosterChange::Remove => roster.remove(user_id),
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectoryStore {
    async fn insert_club(&self, mut club: Club) -> AppResult<Club> {
        let id = ObjectId::new();
        club.id = Some(id);
        self.write()?.clubs.insert(id, club.clone());
        Ok(club)
    }

    async fn find_club(&self, id: &ObjectId) -> AppResult<Option<Club>> {
        self.read(|t| t.clubs.get(id).cloned())
    }

    async fn list_clubs(&self, filter: &ClubFilter) -> AppResult<Vec<Club>> {
        let search = filter
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let category = filter
            .category
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut clubs = self.read(|t| {
            t.clubs
                .values()
                .filter(|club| search.as_deref().is_none_or(|needle| club.matches_search(needle)))
                .filter(|club| {
                    category
                        .as_deref()
                        .is_none_or(|c| club.category.to_lowercase() == c)
                })
                .cloned()
                .collect::<Vec<_>>()
        })?;

        clubs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(clubs)
    }

    async fn update_club(&self, id: &ObjectId, changes: &ClubChanges) -> AppResult<Option<Club>> {
        let mut tables = self.write()?;
        Ok(tables.clubs.get_mut(id).map(|club| {
            changes.apply(club);
            club.clone()
        }))
    }

    async fn delete_club(&self, id: &ObjectId) -> AppResult<bool> {
        let mut tables = self.write()?;
        if tables.clubs.remove(id).is_none() {
            return Ok(false);
        }

        tables.events.retain(|_, event| event.club_id != *id);
        tables.feedback.retain(|_, feedback| feedback.club_id != *id);
        Ok(true)
    }

    async fn insert_event(&self, mut event: Event) -> AppResult<Event> {
        let mut tables = self.write()?;
        if !tables.clubs.contains_key(&event.club_id) {
            return Err(club_not_found());
        }

        let id = ObjectId::new();
        event.id = Some(id);
        tables.events.insert(id, event.clone());
        Ok(event)
    }

    async fn find_event(&self, id: &ObjectId) -> AppResult<Option<Event>> {
        self.read(|t| t.events.get(id).cloned())
    }

    async fn list_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let mut events = self.read(|t| {
            t.events
                .values()
                .filter(|event| filter.club_id.is_none_or(|club_id| event.club_id == club_id))
                .cloned()
                .collect::<Vec<_>>()
        })?;

        events.sort_by_key(|event| event.date);
        Ok(events)
    }

    async fn update_event(&self, id: &ObjectId, changes: &EventChanges) -> AppResult<Option<Event>> {
        let mut tables = self.write()?;
        if let Some(club_id) = changes.club_id.as_ref() {
            if !tables.clubs.contains_key(club_id) {
                return Err(club_not_found());
            }
        }

        Ok(tables.events.get_mut(id).map(|event| {
            changes.apply(event);
            event.clone()
        }))
    }

    async fn delete_event(&self, id: &ObjectId) -> AppResult<bool> {
        Ok(self.write()?.events.remove(id).is_some())
    }

    async fn update_roster(
        &self,
        target: RosterTarget,
        user_id: &ObjectId,
        change: RosterChange,
    ) -> AppResult<RosterOutcome> {
        let mut tables = self.write()?;

        let (roster, updated_at) = match target {
            RosterTarget::ClubMembers(id) => match tables.clubs.get_mut(&id) {
                Some(club) => (&mut club.members, &mut club.updated_at),
                None => return Ok(RosterOutcome::MissingOwner),
            },
            RosterTarget::EventAttendees(id) => match tables.events.get_mut(&id) {
                Some(event) => (&mut event.attendees, &mut event.updated_at),
                None => return Ok(RosterOutcome::MissingOwner),
            },
        };

        if apply_roster(roster, user_id, change) {
            *updated_at = DateTime::now();
            Ok(RosterOutcome::Applied)
        } else {
            Ok(RosterOutcome::Unchanged)
        }
    }

    async fn insert_feedback(&self, mut feedback: Feedback) -> AppResult<Feedback> {
        let mut tables = self.write()?;
        if !tables.clubs.contains_key(&feedback.club_id) {
            return Err(club_not_found());
        }

        let id = ObjectId::new();
        feedback.id = Some(id);
        tables.feedback.insert(id, feedback.clone());
        Ok(feedback)
    }

    async fn list_feedback(&self, club_id: &ObjectId) -> AppResult<Vec<Feedback>> {
        self.read(|t| {
            t.feedback
                .values()
                .filter(|f| f.club_id == *club_id)
                .cloned()
                .collect()
        })
    }

    async fn detach_user(&self, user_id: &ObjectId) -> AppResult<()> {
        let mut tables = self.write()?;
        let now = DateTime::now();

        for club in tables.clubs.values_mut() {
            let mut touched = club.members.remove(user_id);
            if club.admin_id == Some(*user_id) {
                club.admin_id = None;
                touched = true;
            }
            if touched {
                club.updated_at = now;
            }
        }

        for event in tables.events.values_mut() {
            let mut touched = event.attendees.remove(user_id);
            if event.created_by == Some(*user_id) {
                event.created_by = None;
                touched = true;
            }
            if touched {
                event.updated_at = now;
            }
        }

        tables.feedback.retain(|_, f| f.user_id != *user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::clubs::NewClub;
    use crate::domain::entities::events::NewEvent;
    use crate::utils::time_utils::days_from_now;

    fn club(name: &str, category: &str, admin_id: Option<ObjectId>) -> Club {
        Club::new(NewClub {
            name: name.to_string(),
            description: format!("{} description", name),
            image: "https://img.test/club.png".to_string(),
            category: category.to_string(),
            meeting_time: "Monday".to_string(),
            location: "Room 1".to_string(),
            email: "club@test.com".to_string(),
            admin_id,
        })
    }

    fn event(club_id: ObjectId, days: i64, created_by: Option<ObjectId>) -> Event {
        Event::new(NewEvent {
            title: format!("Day {}", days),
            description: "desc".to_string(),
            date: days_from_now(days),
            location: "Hall".to_string(),
            club_id,
            created_by,
        })
    }

    #[actix_web::test]
    async fn test_roster_insert_is_idempotent() {
        let store = MemoryDirectoryStore::new();
        let club = store.insert_club(club("Chess Club", "Strategy", None)).await.unwrap();
        let club_id = club.id.unwrap();
        let user = ObjectId::new();
        let target = RosterTarget::ClubMembers(club_id);

        assert_eq!(
            store.update_roster(target, &user, RosterChange::Insert).await.unwrap(),
            RosterOutcome::Applied
        );
        assert_eq!(
            store.update_roster(target, &user, RosterChange::Insert).await.unwrap(),
            RosterOutcome::Unchanged
        );
        assert_eq!(store.find_club(&club_id).await.unwrap().unwrap().member_count(), 1);

        assert_eq!(
            store.update_roster(target, &user, RosterChange::Remove).await.unwrap(),
            RosterOutcome::Applied
        );
        assert_eq!(
            store.update_roster(target, &user, RosterChange::Remove).await.unwrap(),
            RosterOutcome::Unchanged
        );
        assert_eq!(
            store
                .update_roster(RosterTarget::EventAttendees(ObjectId::new()), &user, RosterChange::Insert)
                .await
                .unwrap(),
            RosterOutcome::MissingOwner
        );
    }

    #[actix_web::test]
    async fn test_club_search_and_category_filter() {
        let store = MemoryDirectoryStore::new();
        store.insert_club(club("Chess Club", "Strategy", None)).await.unwrap();
        store.insert_club(club("Dance Crew", "Dance", None)).await.unwrap();

        let found = store
            .list_clubs(&ClubFilter { search: Some("CHESS".to_string()), category: None })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chess Club");

        let found = store
            .list_clubs(&ClubFilter { search: None, category: Some("dance".to_string()) })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dance Crew");

        let found = store
            .list_clubs(&ClubFilter { search: Some("strat".to_string()), category: Some("Dance".to_string()) })
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_club_cascades() {
        let store = MemoryDirectoryStore::new();
        let keep = store.insert_club(club("Keep", "A", None)).await.unwrap().id.unwrap();
        let gone = store.insert_club(club("Gone", "B", None)).await.unwrap().id.unwrap();

        store.insert_event(event(keep, 3, None)).await.unwrap();
        store.insert_event(event(gone, 1, None)).await.unwrap();
        store
            .insert_feedback(Feedback::new(ObjectId::new(), gone, "great".to_string()))
            .await
            .unwrap();

        assert!(store.delete_club(&gone).await.unwrap());
        assert!(!store.delete_club(&gone).await.unwrap());

        let events = store.list_events(&EventFilter::default()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].club_id, keep);
        assert!(store.list_feedback(&gone).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_writes_into_deleted_club_leave_nothing() {
        let store = MemoryDirectoryStore::new();
        let keep = store.insert_club(club("Keep", "A", None)).await.unwrap().id.unwrap();
        let gone = store.insert_club(club("Gone", "B", None)).await.unwrap().id.unwrap();
        let event_id = store.insert_event(event(keep, 1, None)).await.unwrap().id.unwrap();
        assert!(store.delete_club(&gone).await.unwrap());

        let err = store.insert_event(event(gone, 2, None)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = store
            .insert_feedback(Feedback::new(ObjectId::new(), gone, "late".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let changes = EventChanges { club_id: Some(gone), ..Default::default() };
        let err = store.update_event(&event_id, &changes).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let events = store.list_events(&EventFilter::default()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].club_id, keep);
        assert!(store.list_feedback(&gone).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_events_sorted_by_date() {
        let store = MemoryDirectoryStore::new();
        let club_id = store.insert_club(club("C", "X", None)).await.unwrap().id.unwrap();
        store.insert_event(event(club_id, 10, None)).await.unwrap();
        store.insert_event(event(club_id, 2, None)).await.unwrap();

        let events = store
            .list_events(&EventFilter { club_id: Some(club_id) })
            .await
            .unwrap();
        assert_eq!(events[0].title, "Day 2");
        assert_eq!(events[1].title, "Day 10");
    }

    #[actix_web::test]
    async fn test_detach_user_clears_references() {
        let store = MemoryDirectoryStore::new();
        let user = ObjectId::new();
        let other = ObjectId::new();

        let club_id = store.insert_club(club("C", "X", Some(user))).await.unwrap().id.unwrap();
        let event_id = store.insert_event(event(club_id, 1, Some(user))).await.unwrap().id.unwrap();
        store
            .update_roster(RosterTarget::ClubMembers(club_id), &user, RosterChange::Insert)
            .await
            .unwrap();
        store
            .update_roster(RosterTarget::ClubMembers(club_id), &other, RosterChange::Insert)
            .await
            .unwrap();
        store
            .update_roster(RosterTarget::EventAttendees(event_id), &user, RosterChange::Insert)
            .await
            .unwrap();
        store.insert_feedback(Feedback::new(user, club_id, "mine".to_string())).await.unwrap();
        store.insert_feedback(Feedback::new(other, club_id, "theirs".to_string())).await.unwrap();

        store.detach_user(&user).await.unwrap();

        let club = store.find_club(&club_id).await.unwrap().unwrap();
        assert!(club.admin_id.is_none());
        assert!(!club.members.contains(&user));
        assert!(club.members.contains(&other));

        let event = store.find_event(&event_id).await.unwrap().unwrap();
        assert!(event.created_by.is_none());
        assert_eq!(event.attendee_count(), 0);

        let feedback = store.list_feedback(&club_id).await.unwrap();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].user_id, other);
    }
}
