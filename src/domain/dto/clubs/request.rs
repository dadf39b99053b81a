use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::entities::clubs::ClubChanges;
use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string, parse_reference_id};

/// 클럽 생성 요청
///
/// `admin`을 생략하면 요청한 관리자가 클럽 관리자가 됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 200, message = "클럽 이름은 1-200자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, message = "클럽 설명을 입력해주세요"))]
    pub description: String,

    #[validate(url(message = "이미지는 유효한 URL이어야 합니다"))]
    pub image: String,

    #[validate(length(min = 1, max = 100, message = "카테고리는 1-100자 사이여야 합니다"))]
    pub category: String,

    #[validate(length(min = 1, max = 100, message = "모임 시간은 1-100자 사이여야 합니다"))]
    pub meeting_time: String,

    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: String,

    #[validate(email(message = "유효한 연락처 이메일을 입력해주세요"))]
    pub email: String,

    /// 클럽 관리자 사용자 ID
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub admin: Option<String>,
}

/// 클럽 부분 수정 요청 (PATCH/PUT 공용)
///
/// 회원 명단은 가입/탈퇴로만 바뀌므로 여기서 받지 않습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClubRequest {
    #[validate(length(min = 1, max = 200, message = "클럽 이름은 1-200자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "클럽 설명을 입력해주세요"))]
    pub description: Option<String>,

    #[validate(url(message = "이미지는 유효한 URL이어야 합니다"))]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 100, message = "카테고리는 1-100자 사이여야 합니다"))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 100, message = "모임 시간은 1-100자 사이여야 합니다"))]
    pub meeting_time: Option<String>,

    #[validate(length(min = 1, max = 200, message = "장소는 1-200자 사이여야 합니다"))]
    pub location: Option<String>,

    #[validate(email(message = "유효한 연락처 이메일을 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub admin: Option<String>,
}

impl UpdateClubRequest {
    /// 검증된 요청을 도메인 변경 값으로 변환합니다.
    pub fn into_changes(self) -> AppResult<ClubChanges> {
        let admin_id = self
            .admin
            .as_deref()
            .map(|id| parse_reference_id(id, "admin"))
            .transpose()?;

        Ok(ClubChanges {
            name: clean_optional_string(self.name),
            description: clean_optional_string(self.description),
            image: clean_optional_string(self.image),
            category: clean_optional_string(self.category),
            meeting_time: clean_optional_string(self.meeting_time),
            location: clean_optional_string(self.location),
            email: clean_optional_string(self.email),
            admin_id,
        })
    }
}

/// 클럽 목록 조회 조건 (`?search=&category=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClubQuery {
    /// 이름, 설명, 카테고리 부분 일치 (대소문자 무시)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,

    /// 카테고리 정확히 일치 (대소문자 무시)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
}
