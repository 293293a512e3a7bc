//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"   # memory (기본값) | mongodb
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="employee_service_dev"
//!
//! # Rate Limiting / CORS
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="https://admin.example.com,https://hr.example.com"
//! ```

pub mod data_config;

pub use data_config::*;
