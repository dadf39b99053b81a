//! 인증 요청관련 DTO
//!
//! 로그인과 사용자 정보 수정 요청을 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::users::user::UserRole;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 사용자 정보 수정 요청 (PATCH/PUT 공용, 모든 필드 선택)
///
/// 이메일은 식별 키이므로 수정할 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 150, message = "이름은 1-150자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 150, message = "성은 1-150자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[serde(default, alias = "user_type")]
    pub role: Option<UserRole>,

    pub password: Option<String>,

    pub password2: Option<String>,

    pub is_active: Option<bool>,
}
