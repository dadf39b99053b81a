//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 사용자 조회 캐시를 제공합니다.
//! 캐시는 선택 사항이며 (`CACHE_ENABLED`), 장애 시 리포지토리는
//! 경고 로그만 남기고 데이터베이스로 직접 조회합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_ENABLED=true
//! ```

pub mod redis;
