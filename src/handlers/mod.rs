//! # HTTP Request Handlers Module
//!
//! 각 핸들러는 요청을 DTO로 역직렬화하고, 필요한 서비스를 `instance()`로 꺼내
//! 호출한 뒤 엔티티를 응답 DTO로 바꿔 돌려줍니다. 인가 판단은 서비스가 합니다.
//!
//! ```text
//! handlers/
//! ├── auth.rs     가입, 로그인, 토큰 갱신, 현재 사용자
//! ├── users.rs    사용자 CRUD
//! ├── clubs.rs    클럽 CRUD, 가입/탈퇴, 클럽 이벤트, 피드백
//! └── events.rs   이벤트 CRUD, 참가 신청/취소
//! ```
//!
//! 요청 본문/쿼리 파싱 실패도 다른 오류와 같은 `{"error", "message"}` 형식으로
//! 응답하도록 [`json_config`]와 [`query_config`]를 앱에 등록합니다.

use actix_web::web;
use crate::core::errors::AppError;

pub mod auth;
pub mod users;
pub mod clubs;
pub mod events;

/// 본문 파싱 실패를 `ValidationError`(400)로 변환
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// 쿼리 문자열 파싱 실패를 `ValidationError`(400)로 변환
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
