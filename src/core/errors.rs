//! # Application Error Handling System
//!
//! 클럽 허브 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 실패는 기계가 읽을 수 있는 `kind`와 사람이 읽을 수 있는 메시지를 함께
//! 가지며, `actix_web::ResponseError` 구현을 통해 일관된 JSON 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | kind | HTTP Status | 사용 시나리오 |
//! |----------|------|-------------|---------------|
//! | `ValidationError` | `validation_error` | 400 Bad Request | 필드 누락, 형식 오류, 비밀번호 불일치 |
//! | `DuplicateError` | `duplicate_error` | 409 Conflict | 이미 사용 중인 이메일 |
//! | `AuthenticationError` | `authentication_error` | 401 Unauthorized | 토큰 없음/만료, 잘못된 자격 증명 |
//! | `ForbiddenError` | `forbidden_error` | 403 Forbidden | 정책 거부 |
//! | `NotFound` | `not_found` | 404 Not Found | 존재하지 않는 리소스 ID |
//! | `StateConflictError` | `state_conflict_error` | 409 Conflict | 중복 등록, 비회원 탈퇴 |
//! | `DatabaseError` | `database_error` | 500 | MongoDB 오류 |
//! | `RedisError` | `redis_error` | 500 | 캐시 오류 |
//! | `InternalError` | `internal_error` | 500 | 예상치 못한 오류 |
//!
//! 어떤 에러도 자동으로 재시도되지 않습니다. 호출자는 수정된 요청을 다시 보내야 합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "state_conflict_error",
//!   "message": "이미 등록된 이벤트입니다"
//! }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find_club(&self, id: &ObjectId) -> AppResult<Club> {
//!     self.directory
//!         .find_club(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("클럽을 찾을 수 없습니다".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 하나의 실패 범주에 대응하며, [`AppError::kind`]로 안정적인
/// 식별자를, `Display`로 사람이 읽을 수 있는 메시지를 제공합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    ///
    /// 캐시 조회/저장 실패는 리포지토리에서 로그만 남기고 무시하므로
    /// 실제 응답으로 이어지는 경우는 연결 초기화 실패 정도입니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 필수 필드 누락, 이메일 형식 오류, 비밀번호 확인 불일치,
    /// 약한 비밀번호 등을 포함합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 중복 데이터 에러 (409 Conflict)
    ///
    /// 정규화된 이메일이 이미 다른 사용자에게 할당된 경우입니다.
    #[error("Duplicate error: {0}")]
    DuplicateError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 명단 상태 충돌 에러 (409 Conflict)
    ///
    /// 이미 등록된 이벤트에 다시 등록하거나, 등록하지 않은 이벤트에서
    /// 등록을 취소하거나, 회원이 아닌 클럽에서 탈퇴하려는 경우입니다.
    #[error("State conflict: {0}")]
    StateConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    ///
    /// 인가 정책(`decide`)이 요청을 거부한 경우 항상 이 변형으로 표면화됩니다.
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 기계가 읽을 수 있는 에러 식별자를 반환합니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "database_error",
            AppError::RedisError(_) => "redis_error",
            AppError::ValidationError(_) => "validation_error",
            AppError::DuplicateError(_) => "duplicate_error",
            AppError::NotFound(_) => "not_found",
            AppError::StateConflictError(_) => "state_conflict_error",
            AppError::AuthenticationError(_) => "authentication_error",
            AppError::ForbiddenError(_) => "forbidden_error",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 변형에 담긴 메시지만 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::RedisError(msg)
            | AppError::ValidationError(msg)
            | AppError::DuplicateError(msg)
            | AppError::NotFound(msg)
            | AppError::StateConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::ForbiddenError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateError(_) => StatusCode::CONFLICT,
            AppError::StateConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원본 메시지를 남기고, 클라이언트에는
    /// 내부 정보를 노출하지 않는 일반 메시지를 돌려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let message = if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류 발생: {}", self);
            "서버 내부 오류가 발생했습니다".to_string()
        } else {
            self.message().to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": self.kind(),
            "message": message
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(error: redis::RedisError) -> Self {
        AppError::RedisError(error.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(raw, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
