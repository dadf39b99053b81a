use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::{User, UserRole};

/// 요청 주체
///
/// 인증 미들웨어가 액세스 토큰의 주체를 저장소에서 다시 읽어 만든 값입니다.
/// 역할과 이메일은 토큰이 아니라 현재 저장된 사용자 기준입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,

    pub email: String,

    /// 현재 저장된 역할
    pub role: UserRole,
}

impl AuthenticatedUser {
    /// 저장된 사용자에서 요청 주체를 만듭니다. 비활성 계정은 거부합니다.
    pub fn from_user(user: &User) -> Result<Self, AppError> {
        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 사용자입니다".to_string()))?;

        Ok(Self {
            user_id,
            email: user.email.clone(),
            role: user.role,
        })
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
