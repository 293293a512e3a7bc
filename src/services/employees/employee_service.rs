//! # 직원 관리 서비스 구현
//!
//! 직원 리소스의 비즈니스 규칙을 구현합니다.
//!
//! ## 비즈니스 규칙
//!
//! - **이메일 유일성**: 생성/전체 수정/부분 수정 모두 다른 직원이 사용 중인
//!   이메일로는 저장할 수 없습니다. 자기 자신의 현재 이메일은 충돌이 아닙니다.
//! - **존재 확인 우선**: 수정 요청은 본문 검증보다 먼저 대상 ID의 존재를 확인합니다.
//!   따라서 없는 ID에 대한 수정은 본문과 관계없이 항상 404입니다.
//! - **전부 아니면 전무**: 부분 수정은 모든 필드 변환이 성공한 뒤에만 적용됩니다.
//!
//! ## 에러 처리 전략
//!
//! | 상황 | 에러 |
//! |------|------|
//! | ID에 해당하는 직원 없음 | `AppError::NotFound` |
//! | 중복 이메일, 형식 오류, 허용되지 않은 필드 | `AppError::ValidationError` |
//! | 저장소 장애 | `AppError::DatabaseError` (리포지토리에서 전파) |

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::employees::request::{EmployeeRequest, PatchRequest, parse_changes},
        entities::employees::Employee,
    },
    repositories::employees::{EmployeeRepository, employee_repo::EMAIL_TAKEN_MESSAGE},
};

pub const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Employee not found";

/// 직원 관리 비즈니스 로직 서비스
///
/// 저장소 구현체는 생성자로 주입됩니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn EmployeeRepository> = Arc::new(InMemoryEmployeeRepository::new());
/// let service = EmployeeService::new(repo);
/// let employees = service.list_all().await?;
/// ```
pub struct EmployeeService {
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// 사용 중인 저장소 이름
    pub fn storage_name(&self) -> &'static str {
        self.employee_repo.backend_name()
    }

    /// 전체 직원 목록 (ID 오름차순)
    pub async fn list_all(&self) -> AppResult<Vec<Employee>> {
        let employees = self.employee_repo.find_all().await?;
        log::debug!("직원 목록 조회: {}명", employees.len());
        Ok(employees)
    }

    /// ID로 직원 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 직원이 없음
    pub async fn find_by_id(&self, id: i64) -> AppResult<Employee> {
        self.employee_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()))
    }

    /// 새 직원 등록
    ///
    /// 본문의 `id`는 무시되며 저장소가 새 ID를 부여합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문 검증 실패 또는 이메일 중복
    pub async fn save(&self, request: EmployeeRequest) -> AppResult<Employee> {
        let draft = request.into_new_employee()?;

        if self.employee_repo.exists_by_email(&draft.email).await? {
            log::warn!("직원 등록 거부: 이메일 중복 ({})", draft.email);
            return Err(AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        let created = self.employee_repo.insert(draft).await?;
        log::info!("직원 등록 완료: id={}", created.id);
        Ok(created)
    }

    /// 직원 전체 수정 (PUT)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 직원이 없음 (본문 검증보다 우선)
    /// * `AppError::ValidationError` - 본문 검증 실패 또는 다른 직원과 이메일 중복
    pub async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<Employee> {
        let mut employee = self.find_by_id(id).await?;
        let draft = request.into_new_employee()?;

        self.ensure_email_available(&draft.email, &employee.email).await?;

        employee.replace_with(draft);
        let updated = self.persist(&employee).await?;
        log::info!("직원 전체 수정 완료: id={}", id);
        Ok(updated)
    }

    /// 직원 부분 수정 (PATCH)
    ///
    /// 필드는 이름 사전순으로 변환되며, 첫 번째 실패에서 아무것도 적용하지 않고 중단합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 직원이 없음
    /// * `AppError::ValidationError` - 허용되지 않은 필드, 파싱 불가 값, 이메일 중복
    pub async fn patch(&self, id: i64, changes: &PatchRequest) -> AppResult<Employee> {
        let mut employee = self.find_by_id(id).await?;
        let field_changes = parse_changes(changes)?;

        for change in &field_changes {
            if let Some(email) = change.email() {
                self.ensure_email_available(email, &employee.email).await?;
            }
        }

        for change in &field_changes {
            change.apply_to(&mut employee);
        }

        let updated = self.persist(&employee).await?;
        log::info!(
            "직원 부분 수정 완료: id={}, 필드={:?}",
            id,
            changes.keys().collect::<Vec<_>>()
        );
        Ok(updated)
    }

    /// 직원 삭제
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 직원이 없음
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.employee_repo.delete_by_id(id).await? {
            return Err(AppError::NotFound(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()));
        }
        log::info!("직원 삭제 완료: id={}", id);
        Ok(())
    }

    /// 현재 이메일과 다른 이메일로 바꾸는 경우에만 중복을 검사합니다.
    async fn ensure_email_available(&self, requested: &str, current: &str) -> AppResult<()> {
        if requested != current && self.employee_repo.exists_by_email(requested).await? {
            log::warn!("직원 수정 거부: 이메일 중복 ({})", requested);
            return Err(AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// 조회와 저장 사이에 레코드가 삭제되었으면 `NotFound`로 처리합니다.
    async fn persist(&self, employee: &Employee) -> AppResult<Employee> {
        self.employee_repo
            .replace(employee)
            .await?
            .ok_or_else(|| AppError::NotFound(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()))
    }
}
