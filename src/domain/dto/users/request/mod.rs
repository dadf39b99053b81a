//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 400)
//! 2. **형식 검증**: 이메일, 길이 등 기본 형식 규칙 (`validator`)
//! 3. **비즈니스 검증**: 비밀번호 확인/정책, 이메일 중복 (서비스 계층)

pub mod create_user;
pub mod auth_request;

pub use create_user::{check_password_confirmation, RegisterRequest};
pub use auth_request::{LoginRequest, UpdateUserRequest};
