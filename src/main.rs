//! 프로젝트/사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정된 저장소(MongoDB 또는 인메모리)를 열고 REST API를 제공합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use env_logger::Env;
use log::{error, info, warn};
use project_users_service::config::{Environment, RateLimitConfig, ServerConfig, StoreBackend};
use project_users_service::repositories::Stores;
use project_users_service::routes::app_config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    info!("🚀 프로젝트/사용자 서비스 시작중...");
    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("환경 파일 로드 실패, 프로세스 환경 변수만 사용: {}", e),
    }
    info!("실행 환경: {:?}", Environment::current());

    // 저장소 초기화
    let stores = initialize_stores().await?;

    info!("✅ 저장소 초기화 완료: {}", stores.backend.as_str());

    // HTTP 서버 시작
    start_http_server(stores).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(stores: Stores) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let app = app_config(stores);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 서비스 및 라우트 설정
            .configure(app.clone())
    })
    .bind(bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE`(없으면 `NODE_ENV`) 값에 따라 파일을 고릅니다.
///
/// * `prod` / `production` - `.env.prod`
/// * `dev` / `development` - `.env.dev`
/// * 그 외 또는 미설정 - `.env`
///
/// 로거 초기화 전에 호출되므로 결과는 반환값으로 전달합니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE")
        .or_else(|_| std::env::var("NODE_ENV"))
        .unwrap_or_default();

    let file = match profile.as_str() {
        "prod" | "production" => ".env.prod",
        "dev" | "development" => ".env.dev",
        _ => ".env",
    };

    dotenv::from_filename(file).map(|_| file)
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=project_users_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드로 저장소를 엽니다.
///
/// 연결 실패 시 에러를 로그로 남기고 프로세스를 종료시킵니다.
async fn initialize_stores() -> std::io::Result<Stores> {
    let backend = StoreBackend::current();
    info!("📡 저장소 연결 중... ({})", backend.as_str());

    Stores::open(backend).await.map_err(|e| {
        error!("저장소 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 주소를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
