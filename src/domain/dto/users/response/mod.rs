//! # 사용자 관련 응답 DTO 모듈
//!
//! ## JSON 응답 예제
//!
//! ### 사용자 응답
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "email": "student@test.com",
//!   "first_name": "Student",
//!   "last_name": "User",
//!   "role": "STUDENT",
//!   "is_active": true,
//!   "created_at": "2025-03-01T10:00:00.000Z",
//!   "updated_at": "2025-03-01T10:00:00.000Z"
//! }
//! ```
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "refresh_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "token_type": "Bearer",
//!   "expires_in": 86400,
//!   "user_id": "507f1f77bcf86cd799439011",
//!   "email": "student@test.com",
//!   "role": "STUDENT",
//!   "first_name": "Student",
//!   "last_name": "User"
//! }
//! ```
//!
//! 응답에는 비밀번호 해시가 절대 포함되지 않습니다.

pub mod user_response;

pub use user_response::{CreateUserResponse, LoginResponse, UserResponse};
