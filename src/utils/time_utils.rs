//! # 시간 유틸리티
//!
//! `bson::DateTime`과 API에서 사용하는 RFC 3339 문자열 사이의 변환입니다.

use chrono::{SecondsFormat, Utc};
use mongodb::bson::DateTime;
use crate::core::errors::AppError;

/// `2025-03-01T15:00:00.000Z` 형식의 UTC 문자열로 변환합니다.
pub fn to_rfc3339(value: &DateTime) -> String {
    chrono::DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// RFC 3339 문자열(시간대 포함)을 `bson::DateTime`으로 변환합니다.
pub fn parse_rfc3339(value: &str, field_name: &str) -> Result<DateTime, AppError> {
    chrono::DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| DateTime::from_millis(dt.timestamp_millis()))
        .map_err(|_| {
            AppError::ValidationError(format!(
                "{}은(는) RFC 3339 형식이어야 합니다 (예: 2025-03-01T15:00:00Z)",
                field_name
            ))
        })
}

/// 현재 시각으로부터 `days`일 뒤
pub fn days_from_now(days: i64) -> DateTime {
    let at = Utc::now() + chrono::Duration::days(days);
    DateTime::from_millis(at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let parsed = parse_rfc3339("2025-03-01T15:00:00+09:00", "date").unwrap();
        assert_eq!(to_rfc3339(&parsed), "2025-03-01T06:00:00.000Z");
    }

    #[test]
    fn test_parse_rejects_naive_dates() {
        assert!(matches!(
            parse_rfc3339("2025-03-01 15:00", "date"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_days_from_now_is_in_future() {
        let week = days_from_now(7);
        assert!(week.timestamp_millis() > DateTime::now().timestamp_millis());
    }
}
