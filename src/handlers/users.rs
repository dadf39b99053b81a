//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 가입 (`/auth/register`와 동일) | 201 |
//! | `GET` | `/api/v1/users` | 목록 | 200 |
//! | `GET` | `/api/v1/users/{id}` | 조회 | 200 |
//! | `PATCH`/`PUT` | `/api/v1/users/{id}` | 부분 수정 | 200 |
//! | `DELETE` | `/api/v1/users/{id}` | 삭제 (ADMIN) | 204 |

use actix_web::{delete, get, post, route, web, HttpResponse};
use crate::core::errors::AppResult;
use crate::domain::dto::{CreateUserResponse, RegisterRequest, UpdateUserRequest, UserResponse};
use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    actor: OptionalUser,
    payload: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let user = UserService::instance()?
        .register(actor.0.as_ref(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(CreateUserResponse::new(user)))
}

#[get("")]
pub async fn list_users(actor: AuthenticatedUser) -> AppResult<HttpResponse> {
    let users: Vec<UserResponse> = UserService::instance()?
        .list(&actor)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(actor: AuthenticatedUser, user_id: web::Path<String>) -> AppResult<HttpResponse> {
    let user = UserService::instance()?.get(&actor, &user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[route("/{user_id}", method = "PATCH", method = "PUT")]
pub async fn update_user(
    actor: AuthenticatedUser,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> AppResult<HttpResponse> {
    let user = UserService::instance()?
        .update(&actor, &user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(actor: AuthenticatedUser, user_id: web::Path<String>) -> AppResult<HttpResponse> {
    UserService::instance()?.delete(&actor, &user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
