//! # Domain Layer Module
//!
//! 비즈니스 규칙과 데이터 구조를 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 User, Club, Event, Feedback
//! ├── dto       - API 요청/응답 계약
//! └── models    - 요청 주체, JWT 클레임, 인가 정책, 명단 값 객체
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 도메인 계층은 HTTP 라우팅이나 저장소 구현에 의존하지 않습니다.
//! 특히 [`models::policy`]는 순수 함수라서 단위 테스트만으로 전체 규칙을 검증할 수 있습니다.

pub mod entities;
pub mod dto;
pub mod models;
