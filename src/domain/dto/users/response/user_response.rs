use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::{User, UserRole};
use crate::domain::models::token::TokenPair;
use crate::utils::time_utils::to_rfc3339;

/// 사용자 응답 DTO (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            role,
            is_active,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            first_name,
            last_name,
            role,
            is_active,
            created_at: to_rfc3339(&created_at),
            updated_at: to_rfc3339(&updated_at),
        }
    }
}

/// 회원 가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserResponse,
}

impl CreateUserResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: "회원 가입이 완료되었습니다".to_string(),
            user: UserResponse::from(user),
        }
    }
}

/// 로그인 응답 DTO
///
/// 토큰 쌍과 사용자 요약 정보를 한 단계 객체로 평탄화해서 내려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

impl LoginResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            tokens,
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            role: user.role,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
