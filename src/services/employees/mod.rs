//! 직원 관리 서비스 모듈
//!
//! 직원 리소스의 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::employees::EmployeeService;
//!
//! let service = EmployeeService::new(repo);
//! let employee = service.find_by_id(1).await?;
//! ```

pub mod employee_service;

pub use employee_service::EmployeeService;
