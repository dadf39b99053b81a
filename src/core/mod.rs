//! # Core Framework Module
//!
//! 백엔드 서비스 전역에서 사용하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 로케이터
//! - **ServiceLocator**: 시작 시점에 구성된 서비스를 `TypeId`로 보관하고 조회
//! - **Thread-safe**: `RwLock` 기반, 요청 경로는 읽기 잠금만 사용
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (`thiserror`)
//! - **HTTP 통합**: `actix_web::ResponseError` 구현으로 `{error, message}` JSON 응답
//! - **ErrorContext**: 외부 라이브러리 에러 변환 확장 trait
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppResult, ServiceLocator};
//!
//! pub async fn join(club_id: web::Path<String>, user: AuthenticatedUser) -> AppResult<HttpResponse> {
//!     let service = MembershipService::instance()?;
//!     service.join_club(&user, &parse_object_id(&club_id)?).await?;
//!     Ok(HttpResponse::Ok().json(json!({ "status": "joined club" })))
//! }
//! ```

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ErrorContext};
pub use registry::ServiceLocator;
