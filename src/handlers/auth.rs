//! Authentication HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/auth/register` | 회원 가입 (201) |
//! | `POST` | `/api/v1/auth/login` | 이메일/비밀번호 로그인, 토큰 쌍 발급 |
//! | `POST` | `/api/v1/auth/refresh` | 리프레시 토큰으로 토큰 쌍 재발급 |
//! | `GET` | `/api/v1/auth/me` | 현재 사용자 (Bearer 필요) |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::{CreateUserResponse, LoginRequest, LoginResponse, RefreshRequest, RegisterRequest, UserResponse};
use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
use crate::services::auth::TokenService;
use crate::services::users::UserService;
use crate::utils::string_utils::normalize_email;

#[post("/register")]
pub async fn register(
    actor: OptionalUser,
    payload: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let user = UserService::instance()?
        .register(actor.0.as_ref(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(CreateUserResponse::new(user)))
}

#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> AppResult<HttpResponse> {
    let mut request = payload.into_inner();
    request.email = normalize_email(&request.email);
    request.validate()?;

    let user = UserService::instance()?
        .verify_credential(&request.email, &request.password)
        .await?;
    let tokens = TokenService::instance()?.generate_token_pair(&user)?;

    log::info!("🔑 로그인 성공: {} ({})", user.email, user.role.as_str());
    Ok(HttpResponse::Ok().json(LoginResponse::new(user, tokens)))
}

#[post("/refresh")]
pub async fn refresh(payload: web::Json<RefreshRequest>) -> AppResult<HttpResponse> {
    payload.validate()?;

    let token_service = TokenService::instance()?;
    let claims = token_service.verify_refresh_token(&payload.refresh_token)?;
    let user = UserService::instance()?.find_active(&claims.subject_id()?).await?;
    let tokens = token_service.generate_token_pair(&user)?;

    log::debug!("토큰 갱신: {}", user.email);
    Ok(HttpResponse::Ok().json(tokens))
}

#[get("/me")]
pub async fn current_user(actor: AuthenticatedUser) -> AppResult<HttpResponse> {
    let user = UserService::instance()?.find_active(&actor.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
