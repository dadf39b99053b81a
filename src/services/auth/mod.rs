//! 인증 및 보안 서비스 모듈
//!
//! - [`TokenService`]: HS256 액세스/리프레시 토큰 발급과 검증
//! - [`CredentialVerifier`]: 비밀번호 해시 생성/검증 (bcrypt 구현)
//! - [`password_policy`]: 새 비밀번호 강도 검사
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let tokens = TokenService::instance()?.generate_token_pair(&user)?;
//! let claims = TokenService::instance()?.verify_access_token(&tokens.access_token)?;
//! ```

pub mod token_service;
pub mod credential;
pub mod password_policy;

pub use token_service::{JwtSettings, TokenService};
pub use credential::{BcryptVerifier, CredentialVerifier};
