//! # 인메모리 직원 리포지토리
//!
//! 프로세스 메모리에 직원 레코드를 보관하는 구현체입니다.
//! 기본 저장소이며, 테스트에서도 이 구현체를 사용합니다.
//!
//! 하나의 `RwLock`이 테이블과 ID 시퀀스를 함께 보호합니다.
//! 이메일 중복 검사는 쓰기 락 안에서 다시 수행되므로,
//! 동시에 들어온 두 생성 요청이 같은 이메일로 모두 성공할 수 없습니다.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::employees::{Employee, NewEmployee};
use crate::repositories::employees::employee_repo::{EMAIL_TAKEN_MESSAGE, EmployeeRepository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl Table {
    fn email_taken_by_other(&self, email: &str, own_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != own_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::InternalError("employee table lock poisoned".to_string())
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.email_taken_by_other(email, None))
    }

    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        let mut table = self.table.write().map_err(poisoned)?;

        if table.email_taken_by_other(&employee.email, None) {
            return Err(AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        table.last_id += 1;
        let stored = Employee::from_new(table.last_id, employee);
        table.rows.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn replace(&self, employee: &Employee) -> AppResult<Option<Employee>> {
        let mut table = self.table.write().map_err(poisoned)?;

        if !table.rows.contains_key(&employee.id) {
            return Ok(None);
        }

        if table.email_taken_by_other(&employee.email, Some(employee.id)) {
            return Err(AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string()));
        }

        table.rows.insert(employee.id, employee.clone());
        Ok(Some(employee.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut table = self.table.write().map_err(poisoned)?;
        Ok(table.rows.remove(&id).is_some())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
