//! # 사용자 DTO
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs    회원 가입 (password2 확인 포함)
//! │   └── auth_request.rs   로그인, 사용자 정보 수정
//! └── response/
//!     └── user_response.rs  사용자, 가입, 로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::{check_password_confirmation, LoginRequest, RegisterRequest, UpdateUserRequest};
pub use response::{CreateUserResponse, LoginResponse, UserResponse};
