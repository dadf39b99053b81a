//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 이메일 정규화, ID 파싱
//! - [`time_utils`] - `bson::DateTime` ↔ RFC 3339 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{normalize_email, parse_object_id};
//!
//! let email = normalize_email("  Ada@Test.com ");
//! let club_id = parse_object_id(&path, "클럽")?;
//! ```

pub mod string_utils;
pub mod time_utils;
