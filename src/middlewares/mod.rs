//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <access token>` 검증
//! - 검증된 주체(`AuthenticatedUser`)를 request extensions에 저장
//! - `Required` 모드는 토큰이 없거나 유효하지 않으면 401로 응답
//! - `Optional` 모드는 토큰이 없어도 요청을 진행
//!
//! 역할 검사는 하지 않습니다. 역할은 서비스 계층의 인가 정책이 판정합니다.
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/api/v1/clubs")
//!     .wrap(AuthMiddleware::required())
//!     .service(list_clubs);
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
