use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::entities::events::EventChanges;
use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string, parse_reference_id};
use crate::utils::time_utils::parse_rfc3339;

/// 이벤트 생성 요청
///
/// `date`는 시간대를 포함한 RFC 3339 문자열입니다 (예: `2025-03-01T15:00:00Z`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "이벤트 제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, message = "이벤트 설명을 입력해주세요"))]
    pub description: String,

    #[validate(length(min = 1, message = "이벤트 일시를 입력해주세요"))]
    pub date: String,

    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: String,

    /// 이벤트를 여는 클럽 ID
    #[validate(length(min = 1, message = "클럽을 지정해주세요"))]
    pub club: String,
}

/// 이벤트 부분 수정 요청 (PATCH/PUT 공용). 참석자 명단은 받지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "이벤트 제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "이벤트 설명을 입력해주세요"))]
    pub description: Option<String>,

    pub date: Option<String>,

    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub club: Option<String>,
}

impl UpdateEventRequest {
    pub fn into_changes(self) -> AppResult<EventChanges> {
        let date = clean_optional_string(self.date)
            .map(|raw| parse_rfc3339(&raw, "date"))
            .transpose()?;
        let club_id = self
            .club
            .as_deref()
            .map(|id| parse_reference_id(id, "club"))
            .transpose()?;

        Ok(EventChanges {
            title: clean_optional_string(self.title),
            description: clean_optional_string(self.description),
            date,
            location: clean_optional_string(self.location),
            club_id,
        })
    }
}

/// 이벤트 목록 조회 조건 (`?club=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub club: Option<String>,
}
