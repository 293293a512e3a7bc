//! 직원 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`EmployeeRepository`] trait과 두 가지 구현체를 제공합니다.
//!
//! - [`InMemoryEmployeeRepository`]: 기본 저장소, 테스트용
//! - [`MongoEmployeeRepository`]: `STORAGE_BACKEND=mongodb`일 때 사용
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::employees::{EmployeeRepository, InMemoryEmployeeRepository};
//!
//! let repo: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::new());
//! let employee = repo.find_by_id(1).await?;
//! ```

pub mod employee_repo;
pub mod memory_repo;
pub mod mongo_repo;

pub use employee_repo::EmployeeRepository;
pub use memory_repo::InMemoryEmployeeRepository;
pub use mongo_repo::MongoEmployeeRepository;
