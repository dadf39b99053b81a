//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 액세스/리프레시 토큰 쌍을 발급하고 검증합니다.
//! 두 토큰은 `token_type` 클레임으로 구분되며 서로 대신 사용할 수 없습니다.

use std::sync::Arc;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::core::registry::ServiceLocator;
use crate::domain::entities::users::User;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenType};

/// 토큰 서명/만료 설정
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_ttl_hours: i64,
    pub refresh_ttl_days: i64,
}

impl JwtSettings {
    pub fn from_env() -> Self {
        Self {
            secret: JwtConfig::secret(),
            access_ttl_hours: JwtConfig::expiration_hours(),
            refresh_ttl_days: JwtConfig::refresh_expiration_days(),
        }
    }
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret.as_bytes());

        Self {
            settings,
            encoding_key,
            decoding_key,
        }
    }

    pub fn from_env() -> Self {
        Self::new(JwtSettings::from_env())
    }

    /// 등록된 인스턴스를 가져옵니다.
    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::get::<Self>()
    }

    fn issue(&self, user: &User, token_type: TokenType, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            role: user.role,
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .with_context(|| format!("JWT {:?} 토큰 생성 실패", claims.token_type))
    }

    /// 액세스 토큰과 리프레시 토큰을 함께 발급합니다.
    ///
    /// ```rust,ignore
    /// let tokens = TokenService::instance()?.generate_token_pair(&user)?;
    /// assert_eq!(tokens.token_type, "Bearer");
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.issue(
            user,
            TokenType::Access,
            Duration::hours(self.settings.access_ttl_hours),
        )?;
        let refresh_token = self.issue(
            user,
            TokenType::Refresh,
            Duration::days(self.settings.refresh_ttl_days),
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.settings.access_ttl_hours * 3600,
        })
    }

    fn verify(&self, token: &str, expected: TokenType) -> AppResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => {
                    log::debug!("토큰 검증 실패: {}", e);
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
            })?;

        if claims.token_type != expected {
            log::warn!("🚫 잘못된 용도의 토큰 사용: {:?} (기대값 {:?})", claims.token_type, expected);
            return Err(AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()));
        }

        Ok(claims)
    }

    /// API 호출용 토큰을 검증합니다. 리프레시 토큰은 거부됩니다.
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, TokenType::Access)
    }

    /// 토큰 갱신용 토큰을 검증합니다. 액세스 토큰은 거부됩니다.
    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, TokenType::Refresh)
    }

    /// `Authorization: Bearer <token>` 헤더 값에서 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use mongodb::bson::oid::ObjectId;

    fn service() -> TokenService {
        TokenService::new(JwtSettings {
            secret: "test-secret".to_string(),
            access_ttl_hours: 1,
            refresh_ttl_days: 7,
        })
    }

    fn user() -> User {
        let mut user = User::new(
            "token@test.com".to_string(),
            "Token".to_string(),
            "User".to_string(),
            "hash".to_string(),
            UserRole::EventAdmin,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_token_pair_claims() {
        let service = service();
        let user = user();
        let pair = service.generate_token_pair(&user).unwrap();

        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);

        let claims = service.verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.role, UserRole::EventAdmin);
        assert_eq!(claims.token_type, TokenType::Access);

        let refresh = service.verify_refresh_token(&pair.refresh_token).unwrap();
        assert_ne!(claims.jti, refresh.jti);
    }

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let service = service();
        let pair = service.generate_token_pair(&user()).unwrap();

        assert!(matches!(
            service.verify_access_token(&pair.refresh_token),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.verify_refresh_token(&pair.access_token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let other = TokenService::new(JwtSettings {
            secret: "another-secret".to_string(),
            access_ttl_hours: 1,
            refresh_ttl_days: 1,
        });
        let pair = other.generate_token_pair(&user()).unwrap();

        assert!(service().verify_access_token(&pair.access_token).is_err());
        assert!(service().verify_access_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let expired = TokenService::new(JwtSettings {
            secret: "test-secret".to_string(),
            access_ttl_hours: -2,
            refresh_ttl_days: 1,
        });
        let pair = expired.generate_token_pair(&user()).unwrap();

        match service().verify_access_token(&pair.access_token) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = service();
        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
