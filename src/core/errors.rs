//! # Application Error Handling System
//!
//! 직원 리소스 API 전체에서 사용하는 통합 에러 처리 시스템입니다.
//! 서비스 계층은 문자열 검사 대신 타입이 있는 에러 변형을 반환하고,
//! 핸들러는 `?` 연산자로 에러를 전파하기만 하면 됩니다.
//! HTTP 상태 코드와 응답 본문은 [`ResponseError`] 구현이 한 곳에서 결정합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 중복 이메일, 파싱 불가 값, 허용되지 않은 필드 |
//! | `NotFound` | 404 Not Found | 해당 ID의 직원 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 동일한 구조를 가집니다:
//!
//! ```json
//! {
//!   "status": 404,
//!   "error": "NOT_FOUND",
//!   "message": "Employee not found",
//!   "timestamp": "2024-01-01T10:20:30.000Z"
//! }
//! ```
//!
//! 5xx 에러의 경우 상세 원인은 서버 로그에만 남기고,
//! 클라이언트에는 일반 메시지만 전달합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 반환되면 자동으로 구조화된 JSON 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 중복 이메일, 파싱할 수 없는 급여/날짜, 허용되지 않은 필드,
    /// 잘못된 JSON 본문 등 클라이언트 입력 문제 전반을 나타냅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출해도 되는 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원본 메시지를 그대로, 5xx 에러는 내부 정보를 숨긴
    /// 고정 메시지를 돌려줍니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

/// 모든 에러 응답에 공통으로 사용되는 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: reason_code(status),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// `Not Found` → `NOT_FOUND` 형태의 에러 코드를 만듭니다.
fn reason_code(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown")
        .to_uppercase()
        .replace(' ', "_")
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 여기서 한 번 `error` 레벨로 기록됩니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류 발생: {}", self);
        }

        HttpResponse::build(status).json(ErrorBody::new(status, self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let client = Client::with_options(options).context("MongoDB 클라이언트 생성 실패")?;
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
