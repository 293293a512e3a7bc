//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 타입을 정의합니다.
//! 엔티티와 분리되어 있어 입력 검증 규칙과 응답 형태를 독립적으로 관리할 수 있습니다.

pub mod employees;
