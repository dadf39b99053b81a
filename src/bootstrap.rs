//! 저장소 연결과 서비스 등록
//!
//! 서버 바이너리와 `seed` 바이너리가 같은 방식으로 저장소를 고르고 서비스를 등록합니다.
//!
//! ```text
//! STORAGE_BACKEND=mongo  → MongoDB (+ CACHE_ENABLED면 Redis)
//! STORAGE_BACKEND=memory → 프로세스 메모리
//! ```

use std::sync::Arc;
use env_logger::Env;
use log::{info, warn};
use crate::caching::redis::RedisCache;
use crate::config::{CacheConfig, StorageBackend, StorageConfig};
use crate::core::errors::AppResult;
use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::repositories::memory::{MemoryDirectoryStore, MemoryUserStore};
use crate::repositories::ports::{DirectoryStore, UserStore};
use crate::repositories::{DirectoryRepository, UserRepository};
use crate::services::auth::{CredentialVerifier, TokenService};
use crate::services::clubs::ClubService;
use crate::services::events::EventService;
use crate::services::feedback::FeedbackService;
use crate::services::membership::MembershipService;
use crate::services::users::UserService;

/// `PROFILE`에 맞는 .env 파일을 로드합니다.
///
/// * `PROFILE=dev` - .env.dev (기본값)
/// * `PROFILE=prod` - .env.prod
/// * 기타 - .env
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv::dotenv().map(|_| ".env"),
    };

    // 로거 초기화 전이므로 결과는 stderr로 남깁니다.
    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패, 프로세스 환경 변수만 사용합니다: {}", profile, e),
    }
}

/// `RUST_LOG`가 없으면 `default_filter`를 사용합니다.
pub fn init_logging(default_filter: &str) {
    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// 서비스가 사용할 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub directory: Arc<dyn DirectoryStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            directory: Arc::new(MemoryDirectoryStore::new()),
        }
    }
}

/// 설정된 백엔드에 연결합니다.
///
/// Redis 연결 실패는 경고 후 캐시 없이 진행합니다. MongoDB 연결 실패는 오류입니다.
pub async fn connect_stores() -> AppResult<Stores> {
    match StorageConfig::backend() {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 중: 프로세스 종료 시 데이터가 사라집니다");
            Ok(Stores::in_memory())
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(
                Database::connect(&StorageConfig::mongodb_uri(), &StorageConfig::database_name()).await?,
            );

            let cache = connect_cache().await;

            let users = UserRepository::new(database.clone(), cache);
            users.create_indexes().await?;
            let directory = DirectoryRepository::new(database);
            directory.create_indexes().await?;
            info!("✅ 인덱스 확인 완료");

            Ok(Stores {
                users: Arc::new(users),
                directory: Arc::new(directory),
            })
        }
    }
}

async fn connect_cache() -> Option<Arc<RedisCache>> {
    if !CacheConfig::enabled() {
        info!("Redis 캐시 비활성화 (CACHE_ENABLED=false)");
        return None;
    }

    match RedisCache::connect(&CacheConfig::redis_url()).await {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("⚠️ Redis 연결 실패, 캐시 없이 진행합니다: {}", e);
            None
        }
    }
}

/// 모든 서비스를 [`ServiceLocator`]에 등록합니다.
pub fn register_services(stores: &Stores, hasher: Arc<dyn CredentialVerifier>, tokens: TokenService) {
    ServiceLocator::set(Arc::new(tokens));
    ServiceLocator::set(Arc::new(UserService::new(
        stores.users.clone(),
        stores.directory.clone(),
        hasher,
    )));
    ServiceLocator::set(Arc::new(ClubService::new(
        stores.directory.clone(),
        stores.users.clone(),
    )));
    ServiceLocator::set(Arc::new(EventService::new(stores.directory.clone())));
    ServiceLocator::set(Arc::new(MembershipService::new(stores.directory.clone())));
    ServiceLocator::set(Arc::new(FeedbackService::new(stores.directory.clone())));

    info!("✅ 모든 서비스가 등록되었습니다");
}
