//! 클럽 허브 메인 애플리케이션
//!
//! 저장소에 연결하고 서비스를 등록한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use log::{error, info};
use club_hub_backend::bootstrap::{connect_stores, init_logging, load_env_file, register_services, Stores};
use club_hub_backend::config::{RateLimitConfig, ServerConfig, StorageConfig};
use club_hub_backend::fixtures::Seeder;
use club_hub_backend::routes::configure_all_routes;
use club_hub_backend::services::auth::{BcryptVerifier, CredentialVerifier, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    init_logging("info,actix_web=debug");

    info!("🚀 클럽 허브 서비스 시작중...");

    let stores = connect_stores().await.map_err(|e| {
        error!("❌ 저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let hasher: Arc<dyn CredentialVerifier> = Arc::new(BcryptVerifier::from_env());
    register_services(&stores, hasher.clone(), TokenService::from_env());

    if StorageConfig::seed_test_data() {
        seed_test_data(&stores, hasher).await;
    }

    start_http_server().await
}

/// `SEED_TEST_DATA=true`일 때 테스트 계정과 클럽을 적재합니다. 실패해도 서버는 계속 뜹니다.
async fn seed_test_data(stores: &Stores, hasher: Arc<dyn CredentialVerifier>) {
    info!("🌱 테스트 데이터 적재 중...");
    if let Err(e) = Seeder::new(stores, hasher).run().await {
        error!("테스트 데이터 적재 실패: {}", e);
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서: Rate Limiting → CORS → 요청 로깅 → 경로 정규화
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 Rate Limiting 설정 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 프론트엔드 개발 서버(3000)와 자체 서버(8080)의 로컬 Origin을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
