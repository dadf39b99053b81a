//! # 회원 가입 요청 DTO
//!
//! `POST /api/v1/auth/register`와 `POST /api/v1/users`가 공유하는 요청 본문입니다.
//!
//! ## 검증 순서
//!
//! 1. `password2` 존재 여부와 `password` 일치 여부 (저장소 접근 전)
//! 2. 필드 형식 검증 (`validator`)
//! 3. 비밀번호 정책 (길이, 숫자만, 흔한 비밀번호, 이메일과 동일)
//! 4. 이메일 중복 (저장소)
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "student@test.com",
//!   "password": "student123",
//!   "password2": "student123",
//!   "first_name": "Student",
//!   "last_name": "User",
//!   "user_type": "STUDENT"
//! }
//! ```

use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::UserRole;

/// 회원 가입 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (저장 전 정규화)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    /// 비밀번호 확인
    #[serde(default)]
    pub password2: Option<String>,

    #[validate(length(min = 1, max = 150, message = "이름은 1-150자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 150, message = "성은 1-150자 사이여야 합니다"))]
    pub last_name: String,

    /// 역할 (기본값 STUDENT). `user_type`도 허용합니다.
    #[serde(default, alias = "user_type")]
    pub role: Option<UserRole>,
}

impl RegisterRequest {
    /// `password2`가 있고 `password`와 같은지 확인합니다.
    pub fn check_confirmation(&self) -> Result<(), AppError> {
        check_password_confirmation(&self.password, self.password2.as_deref())
    }
}

/// 비밀번호 확인 값 검사 (가입과 비밀번호 변경에서 공용)
pub fn check_password_confirmation(password: &str, confirmation: Option<&str>) -> Result<(), AppError> {
    match confirmation {
        None => Err(AppError::ValidationError(
            "비밀번호 확인(password2)이 필요합니다".to_string(),
        )),
        Some(confirmation) if confirmation != password => Err(AppError::ValidationError(
            "비밀번호가 일치하지 않습니다".to_string(),
        )),
        Some(_) => Ok(()),
    }
}
