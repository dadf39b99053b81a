//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙에서 관리합니다.
//! 모든 설정은 정적 함수로 노출되며, 값이 없거나 잘못된 경우 개발용 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 캐시, 서버, 요청 제한, 실행 환경
//! - [`auth_config`] - JWT 토큰
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ENVIRONMENT="production"      # development, test, staging, production
//!
//! # 저장소
//! export STORAGE_BACKEND="mongo"       # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="club_hub"
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_ENABLED="true"
//! export SEED_TEST_DATA="false"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="7"
//! export BCRYPT_COST="12"              # 4-15 범위
//!
//! # 요청 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
