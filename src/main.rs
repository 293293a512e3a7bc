//! 직원 관리 서비스 메인 애플리케이션
//!
//! 설정된 저장소로 리포지토리와 서비스를 조립하고 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use employee_service_backend::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, StorageBackend, StorageConfig,
};
use employee_service_backend::core::errors::AppResult;
use employee_service_backend::db::Database;
use employee_service_backend::repositories::employees::{
    EmployeeRepository, InMemoryEmployeeRepository, MongoEmployeeRepository,
};
use employee_service_backend::routes::configure_all_routes;
use employee_service_backend::services::employees::EmployeeService;
use employee_service_backend::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 직원 관리 서비스 시작중... (환경: {:?})", Environment::current());

    let repository = build_repository().await.map_err(|e| {
        error!("저장소 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let service = web::Data::new(EmployeeService::new(repository));

    info!("✅ 서비스 초기화 완료 (저장소: {})", service.storage_name());

    start_http_server(service).await
}

/// 설정된 저장소 구현체를 생성합니다.
///
/// * `STORAGE_BACKEND=memory` (기본값) - 프로세스 메모리
/// * `STORAGE_BACKEND=mongodb` - MongoDB 연결 후 인덱스 생성
async fn build_repository() -> AppResult<Arc<dyn EmployeeRepository>> {
    let backend = StorageConfig::backend();
    info!("📦 저장소 백엔드: {}", backend.as_str());

    match backend {
        StorageBackend::Memory => {
            if Environment::current().is_production() {
                warn!("⚠️ 운영 환경에서 인메모리 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            }
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Arc::new(Database::new().await?);
            info!("✅ MongoDB 연결 성공 ({})", database.database_name());

            let repository = MongoEmployeeRepository::new(database);
            repository.create_indexes().await?;
            Ok(Arc::new(repository))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<EmployeeService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    let storage = service.storage_name();

    let server = HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run();

    print_startup_summary(&bind_address, storage, workers);
    info!("📍 Health check: http://{}/health", bind_address);

    server.await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 출력으로 남깁니다.
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    match result {
        Ok(()) => println!("Current profile: {} (env 파일 로드 됨)", profile),
        Err(e) => println!("Current profile: {} (env 파일 없음: {})", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`(쉼표 구분)에 지정된 Origin만 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
