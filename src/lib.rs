//! 클럽 허브 백엔드
//!
//! 학교 동아리(클럽), 이벤트, 회원 명단, 참가 신청, 피드백을 관리하는 REST API 서비스입니다.
//! JWT 액세스/리프레시 토큰으로 인증하고, 역할(STUDENT, ADMIN, EVENT_ADMIN) 기반 정책으로 인가합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 로그인, 프로필 수정, 계정 삭제 (참조 정리 포함)
//! - **클럽**: 검색/카테고리 필터, 가입과 탈퇴
//! - **이벤트**: 클럽별 일정, 참가 신청과 취소
//! - **피드백**: 클럽별 의견 수집
//! - **저장소**: MongoDB (+ 선택적 Redis 캐시) 또는 인메모리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 스코프별 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← DTO 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 정책 검사, 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Store traits   │ ← UserStore, DirectoryStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 또는 인메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use club_hub_backend::services::membership::MembershipService;
//!
//! let club = MembershipService::instance()?.join_club(&actor, &club_id).await?;
//! assert!(club.members.contains(&actor.user_id));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod bootstrap;
pub mod fixtures;
