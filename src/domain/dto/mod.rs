//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//! 엔티티와 분리되어 있어 비밀번호 해시 같은 내부 필드가 노출되지 않고,
//! `ObjectId`와 `bson::DateTime`은 16진수 문자열과 RFC 3339 문자열로 변환됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/      회원 가입, 로그인, 사용자 수정 / 사용자·로그인 응답
//! ├── tokens/     토큰 갱신 요청
//! ├── clubs/      클럽 생성·수정·검색 / 클럽 응답 (member_count 포함)
//! ├── events/     이벤트 생성·수정·필터 / 이벤트 응답 (attendee_count 포함)
//! └── feedback/   피드백 작성 / 피드백 응답
//! ```
//!
//! ## 검증
//!
//! 요청 DTO는 `validator::Validate`를 구현하며, 핸들러에서
//! `payload.validate()?`로 검사합니다. 실패는 `AppError::ValidationError`(400)로 변환됩니다.

pub mod users;
pub mod tokens;
pub mod clubs;
pub mod events;
pub mod feedback;

pub use users::{CreateUserResponse, LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest, UserResponse};
pub use tokens::RefreshRequest;
pub use clubs::{ClubQuery, ClubResponse, CreateClubRequest, UpdateClubRequest};
pub use events::{CreateEventRequest, EventQuery, EventResponse, UpdateEventRequest};
pub use feedback::{FeedbackResponse, SubmitFeedbackRequest};
