//! API 라우트 설정 모듈
//!
//! 직원 리소스 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//! 요청 본문/경로 추출 실패도 여기서 표준 에러 본문(400)으로 변환됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::services::employees::EmployeeService;

/// 모든 라우트와 추출기 설정을 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_employee_routes(cfg);
}

fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/employees")
            .service(handlers::employees::list_employees)
            .service(handlers::employees::create_employee)
            .service(handlers::employees::get_employee)
            .service(handlers::employees::update_employee)
            .service(handlers::employees::patch_employee)
            .service(handlers::employees::delete_employee),
    );
}

/// 잘못된 JSON 본문을 `400` 에러 본문으로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("Malformed request body: {}", err)).into()
    })
}

/// 정수가 아닌 경로 ID를 `400` 에러 본문으로 변환합니다.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid path parameter: {}", err)).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "employee_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "storage": "memory"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<EmployeeService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "employee_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": service.storage_name(),
    }))
}
