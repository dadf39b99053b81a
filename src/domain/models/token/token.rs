//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 용도가 다른 두 토큰(액세스/리프레시)을 정의합니다.
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::users::user::UserRole;

/// 토큰 용도
///
/// 리프레시 토큰은 API 호출에, 액세스 토큰은 토큰 갱신에 사용할 수 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID, 16진수 ObjectId)
/// - `email`: 발급 시점의 사용자 이메일
/// - `role`: 발급 시점의 사용자 역할
/// - `token_type`: `access` 또는 `refresh`
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iat` / `exp`: 발급 / 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub token_type: TokenType,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `sub`를 사용자 ID로 해석합니다. 형식이 틀리면 `AuthenticationError`입니다.
    pub fn subject_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.sub)
            .map_err(|_| AppError::AuthenticationError("유효하지 않은 토큰 주체입니다".to_string()))
    }
}

/// 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 항상 "Bearer"
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
