//! 인증 관련 모델
//!
//! - [`authenticated_user`] - 검증된 토큰에서 추출한 요청 주체
//! - [`auth_mode`] - 미들웨어 인증 모드

pub mod authenticated_user;
pub mod auth_mode;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use auth_mode::AuthMode;
