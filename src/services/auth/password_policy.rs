//! 비밀번호 정책
//!
//! 위반 시 `ValidationError`를 반환하며 메시지는 `weak_password:`로 시작합니다.

use crate::core::errors::{AppError, AppResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwerty123",
    "iloveyou",
    "11111111",
    "abc12345",
    "letmein1",
    "welcome1",
];

fn weak(reason: &str) -> AppError {
    AppError::ValidationError(format!("weak_password: {}", reason))
}

/// 새 비밀번호가 정책을 만족하는지 검사합니다.
pub fn check_password_strength(password: &str, email: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(weak(&format!("비밀번호는 최소 {}자 이상이어야 합니다", MIN_PASSWORD_LENGTH)));
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(weak("숫자로만 된 비밀번호는 사용할 수 없습니다"));
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(weak("너무 흔한 비밀번호입니다"));
    }

    if !email.is_empty() && lowered == email.trim().to_lowercase() {
        return Err(weak("이메일과 같은 비밀번호는 사용할 수 없습니다"));
    }

    Ok(())
}
