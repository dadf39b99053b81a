//! # 문자열 유틸리티
//!
//! 요청 값 정리, 이메일 정규화, 식별자 파싱 등 문자열 처리 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 공백만 있는 값은 `ValidationError`, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Chess Club  ", "name").unwrap(), "Chess Club");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리. 빈 값은 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용하며,
/// 공백만 있는 문자열과 `null`을 모두 `None`으로 처리합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 이메일 정규화 (앞뒤 공백 제거 + 소문자화)
///
/// 저장과 조회 모두 이 함수를 거친 값을 사용하므로 `Ada@Test.com `과
/// `ada@test.com`은 같은 계정입니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 경로 파라미터의 16진수 ID를 `ObjectId`로 변환합니다.
///
/// 형식이 잘못된 ID는 존재할 수 없는 리소스이므로 `NotFound`로 처리합니다.
pub fn parse_object_id(value: &str, resource: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::NotFound(format!("{}을(를) 찾을 수 없습니다: {}", resource, value)))
}

/// 요청 본문의 참조 ID를 `ObjectId`로 변환합니다. 잘못된 형식은 `ValidationError`입니다.
pub fn parse_reference_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("{} 형식이 올바르지 않습니다", field_name)))
}

/// MongoDB `$regex` 검색어로 쓰기 위해 정규식 메타 문자를 이스케이프합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
