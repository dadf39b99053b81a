//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## 모듈 구성
//!
//! ### [`auth`] - 요청 주체
//! - `AuthenticatedUser`: 검증된 액세스 토큰에서 추출한 사용자 ID, 이메일, 역할
//! - `AuthMode`: 인증 미들웨어의 필수/선택 모드
//!
//! ### [`token`] - JWT 클레임
//! - `TokenClaims`, `TokenType`, `TokenPair`
//!
//! ### [`policy`] - 인가 정책
//! - `decide(actor, action, resource)` 순수 함수와 `enforce` 헬퍼
//!
//! ### [`roster`] - 명단 값 객체
//! - 중복 없는 회원/참석자 집합
//!
//! ## 흐름
//!
//! ```text
//! Bearer 토큰 ──▶ TokenClaims ──▶ AuthenticatedUser
//!                                        │
//!                                        ▼
//!                          policy::enforce(actor, action, kind)
//!                                        │
//!                                        ▼
//!                        서비스 / 멤버십 코디네이터 ──▶ Roster
//! ```

pub mod auth;
pub mod token;
pub mod policy;
pub mod roster;

pub use auth::{AuthMode, AuthenticatedUser};
pub use policy::{Action, Decision, DenyReason, ResourceKind};
pub use roster::Roster;
pub use token::{TokenClaims, TokenPair, TokenType};
