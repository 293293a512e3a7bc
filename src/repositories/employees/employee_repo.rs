//! # 직원 리포지토리 계약
//!
//! 서비스 계층이 의존하는 저장소 인터페이스입니다.
//! 구현체는 생성 시점에 `Arc<dyn EmployeeRepository>`로 서비스에 주입됩니다.
//!
//! ## 구현 요구사항
//!
//! - 생성/수정/삭제는 레코드 단위로 원자적이어야 합니다.
//! - 이메일 유일성은 쓰기 시점에 저장소 수준에서도 보장되어야 하며,
//!   위반 시 `AppError::ValidationError`를 반환합니다.
//! - 존재하지 않는 레코드는 에러가 아니라 `None` / `false`로 표현합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::employees::{Employee, NewEmployee};

/// 이메일 중복 시 사용하는 공통 메시지
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 모든 직원을 ID 오름차순으로 조회합니다.
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 새 ID를 부여하여 저장하고 저장된 엔티티를 반환합니다.
    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// 같은 ID의 레코드를 통째로 교체합니다.
    ///
    /// 해당 ID가 (동시 삭제 등으로) 더 이상 없으면 `None`을 반환합니다.
    async fn replace(&self, employee: &Employee) -> AppResult<Option<Employee>>;

    /// 삭제되었으면 `true`, 해당 ID가 없었으면 `false`
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;

    /// 저장소 이름 (헬스체크/로그 표시용)
    fn backend_name(&self) -> &'static str;
}
