//! # Domain Module
//!
//! 직원 리소스의 도메인 타입을 정의하는 모듈입니다.
//!
//! - [`entities`] - 저장소가 소유하는 영속 레코드 (`Employee`)
//! - [`dto`] - 요청/응답 데이터 전송 객체

pub mod entities;
pub mod dto;

pub use entities::employees::{Employee, NewEmployee};
