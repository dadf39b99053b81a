//! 명단(Roster) 값 객체
//!
//! 클럽 회원 목록과 이벤트 참석자 목록을 표현합니다. 같은 사용자가
//! 두 번 저장될 수 없으며, 삽입 순서를 유지합니다.
//!
//! BSON/JSON에서는 `ObjectId` 배열로 저장되고, 읽어올 때 중복이 있으면
//! 첫 번째 항목만 남깁니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 중복 없는 사용자 참조 집합
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ObjectId>", into = "Vec<ObjectId>")]
pub struct Roster(Vec<ObjectId>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 추가합니다. 이미 있으면 `false`를 반환하고 아무것도 바꾸지 않습니다.
    pub fn insert(&mut self, user_id: ObjectId) -> bool {
        if self.contains(&user_id) {
            return false;
        }
        self.0.push(user_id);
        true
    }

    /// 사용자를 제거합니다. 없었으면 `false`를 반환합니다.
    pub fn remove(&mut self, user_id: &ObjectId) -> bool {
        match self.0.iter().position(|id| id == user_id) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, user_id: &ObjectId) -> bool {
        self.0.contains(user_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.0.iter()
    }

    /// 16진수 문자열 목록 (API 응답용)
    pub fn to_hex_vec(&self) -> Vec<String> {
        self.0.iter().map(|id| id.to_hex()).collect()
    }
}

impl From<Vec<ObjectId>> for Roster {
    fn from(ids: Vec<ObjectId>) -> Self {
        let mut roster = Roster::new();
        for id in ids {
            roster.insert(id);
        }
        roster
    }
}

impl From<Roster> for Vec<ObjectId> {
    fn from(roster: Roster) -> Self {
        roster.0
    }
}
