//! Employees Entity Module
//!
//! 직원 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::employees::{Employee, NewEmployee};
//!
//! let draft = NewEmployee {
//!     name: "Elena Garcia".to_string(),
//!     email: "elena.g@example.com".to_string(),
//!     salary: None,
//!     hire_date: None,
//! };
//! let employee = Employee::from_new(1, draft);
//! ```

pub mod employee;

pub use employee::{Employee, NewEmployee};
