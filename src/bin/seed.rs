//! 개발용 테스트 데이터 적재 도구
//!
//! ```bash
//! PROFILE=dev cargo run --bin seed
//! ```
//!
//! 서버와 같은 환경 변수(`STORAGE_BACKEND`, `MONGODB_URI`, ...)를 사용합니다.

use std::process::ExitCode;
use std::sync::Arc;
use log::{error, info};
use club_hub_backend::bootstrap::{connect_stores, init_logging, load_env_file};
use club_hub_backend::config::{Environment, StorageBackend, StorageConfig};
use club_hub_backend::fixtures::Seeder;
use club_hub_backend::services::auth::BcryptVerifier;

#[actix_web::main]
async fn main() -> ExitCode {
    load_env_file();
    init_logging("info");

    if Environment::current() == Environment::Production {
        error!("❌ 운영 환경에서는 테스트 데이터를 적재할 수 없습니다 (ENVIRONMENT=development로 실행하세요)");
        return ExitCode::FAILURE;
    }
    if StorageConfig::backend() == StorageBackend::Memory {
        info!("인메모리 저장소에는 적재해도 프로세스 종료와 함께 사라집니다");
    }

    let stores = match connect_stores().await {
        Ok(stores) => stores,
        Err(e) => {
            error!("❌ 저장소 연결 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match Seeder::new(&stores, Arc::new(BcryptVerifier::from_env())).run().await {
        Ok(report) => {
            info!("✅ 적재 결과: {:?}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 테스트 데이터 적재 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}
