//! 직원 관리 서비스 백엔드
//!
//! 직원(Employee) 리소스에 대한 CRUD REST API를 제공합니다.
//! 저장소는 인메모리 또는 MongoDB 중에서 선택하며,
//! 서비스와 리포지토리는 생성자를 통해 명시적으로 주입됩니다.
//!
//! # Features
//!
//! - **직원 관리**: 목록/단건 조회, 생성, 전체 수정(PUT), 부분 수정(PATCH), 삭제
//! - **입력 검증**: `validator` 기반 본문 검증, 허용 필드 기반 부분 수정
//! - **표준 에러 본문**: `{status, error, message, timestamp}`
//! - **저장소 선택**: `STORAGE_BACKEND=memory|mongodb`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory/MongoDB  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use employee_service_backend::repositories::employees::InMemoryEmployeeRepository;
//! use employee_service_backend::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
//! let employees = service.list_all().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
