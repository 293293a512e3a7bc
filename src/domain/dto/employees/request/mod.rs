//! # 직원 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! - [`EmployeeRequest`]: `POST`/`PUT` 본문. `validator` 크레이트로 형식 검증
//! - [`PatchRequest`]: `PATCH` 본문. 필드별 변환 표를 통해 [`FieldChange`] 목록으로 변환
//!
//! 검증 실패는 모두 `AppError::ValidationError`가 되며 HTTP 400으로 응답됩니다.

pub mod employee_request;
pub mod patch_request;

pub use employee_request::EmployeeRequest;
pub use patch_request::{FieldChange, PatchRequest, parse_changes};
