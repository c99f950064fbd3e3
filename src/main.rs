//! 사용자 캐시 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB, Redis 연결을 만들어 서비스에 주입하고 요청 메트릭을 수집합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_cache_service::caching::redis::RedisClient;
use users_cache_service::config::{CacheSettings, ServerConfig};
use users_cache_service::db::Database;
use users_cache_service::metrics::HttpMetrics;
use users_cache_service::middlewares::MetricsMiddleware;
use users_cache_service::repositories::users::user_repo::UserRepository;
use users_cache_service::routes::{configure_all_routes, configure_cors};
use users_cache_service::services::users::UserService;

/// 종료 신호 후 처리 중인 요청을 기다리는 최대 시간 (초)
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 캐시 서비스 시작중...");

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await?;

    let settings = CacheSettings::from_env();
    info!(
        "🗂️ 사용자 목록 캐시: TTL {}초, 쓰기 정책 {:?}",
        settings.ttl.as_secs(),
        settings.write_policy
    );

    let user_service = web::Data::new(UserService::new(
        Arc::new(UserRepository::new(&database)),
        redis_client,
        settings,
    ));

    let metrics = Arc::new(HttpMetrics::new().map_err(|e| {
        error!("메트릭 레지스트리 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(user_service, metrics).await;

    info!("🛑 서버 종료, 데이터베이스 연결 정리중...");
    database.shutdown().await;

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 요청 메트릭 미들웨어를 포함합니다.
/// SIGINT/SIGTERM을 받으면 처리 중인 요청을 최대 [`SHUTDOWN_TIMEOUT_SECS`]초 기다린 뒤 종료합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    metrics: Arc<HttpMetrics>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다 (워커 {}개)", bind_address, workers);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Metrics: http://{}/metrics", bind_address);

    let metrics_data = web::Data::new(metrics.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 마지막 wrap이 가장 바깥 계층: CORS가 응답한 요청까지 측정
            .wrap(MetricsMiddleware::new(metrics.clone()))

            .app_data(user_service.clone())
            .app_data(metrics_data.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(workers)
        .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB와 Redis 핸들을 생성합니다
///
/// 연결 문자열이 잘못된 경우에만 시작을 중단합니다.
/// 서버에 닿지 않는 경우는 각 `connect`가 로그만 남기고 핸들을 반환하며,
/// 이후 요청이 실패 응답을 받습니다.
async fn initialize_data_stores() -> std::io::Result<(Database, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::connect().await.map_err(|e| {
        error!("❌ MongoDB 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let redis_client = RedisClient::connect().await.map_err(|e| {
        error!("❌ Redis 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    Ok((database, Arc::new(redis_client)))
}
