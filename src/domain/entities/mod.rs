//! 도메인 엔티티 모듈
//!
//! 저장소가 소유하는 영속 레코드 타입을 정의합니다.

pub mod employees;

pub use employees::*;
