//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 검증에 필요한 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//!
//! let secret = JwtConfig::secret();
//! let expiration = JwtConfig::expiration_hours();
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정
///
/// 액세스 토큰은 시간 단위, 리프레시 토큰은 일 단위로 만료됩니다.
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간, 리프레시 토큰 7일
/// - **프로덕션**: 액세스 토큰 1시간 이하, 리프레시 토큰 30일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    /// 최소 256비트(32바이트) 길이의 랜덤 키를 사용하세요.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "club-hub-dev-secret-key".to_string()
        })
    }

    /// 액세스 토큰 만료 시간(시간 단위). 기본값 24
    pub fn expiration_hours() -> i64 {
        Self::positive_or(env::var("JWT_EXPIRATION_HOURS").ok().as_deref(), 24)
    }

    /// 리프레시 토큰 만료 시간(일 단위). 기본값 7
    pub fn refresh_expiration_days() -> i64 {
        Self::positive_or(env::var("JWT_REFRESH_EXPIRATION_DAYS").ok().as_deref(), 7)
    }

    fn positive_or(raw: Option<&str>, default: i64) -> i64 {
        raw.and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(default)
    }
}
