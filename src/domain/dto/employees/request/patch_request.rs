//! 직원 부분 수정(PATCH) 요청 처리
//!
//! 요청 본문은 `필드명 → 새 값` 매핑입니다. 각 필드는 [`PATCHABLE_FIELDS`] 표에
//! 등록된 변환 함수로 타입이 있는 [`FieldChange`]가 됩니다.
//!
//! 변환은 필드명 사전순으로 진행되며, 허용되지 않은 필드나 잘못된 값을 만나면
//! 즉시 중단됩니다. 변환이 모두 성공하기 전에는 어떤 변경도 적용되지 않습니다.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use validator::ValidateEmail;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::employees::request::employee_request::{validate_name, validate_salary};
use crate::domain::entities::employees::Employee;
use crate::utils::string_utils::json_value_as_text;

/// PATCH 요청 본문
///
/// `BTreeMap`이므로 순회 순서는 항상 필드명 사전순입니다.
pub type PatchRequest = BTreeMap<String, Value>;

/// 검증을 통과한 단일 필드 변경
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Name(String),
    Email(String),
    Salary(Decimal),
    HireDate(NaiveDate),
}

type Coercion = fn(&Value) -> AppResult<FieldChange>;

/// 수정 가능한 필드와 해당 변환 함수
pub const PATCHABLE_FIELDS: [(&str, Coercion); 4] = [
    ("email", coerce_email),
    ("hireDate", coerce_hire_date),
    ("name", coerce_name),
    ("salary", coerce_salary),
];

impl FieldChange {
    /// 직원 엔티티에 변경을 적용합니다.
    pub fn apply_to(&self, employee: &mut Employee) {
        match self {
            FieldChange::Name(name) => employee.name = name.clone(),
            FieldChange::Email(email) => employee.email = email.clone(),
            FieldChange::Salary(salary) => employee.salary = Some(*salary),
            FieldChange::HireDate(date) => employee.hire_date = Some(*date),
        }
    }

    /// 변경 대상 이메일 (이메일 변경인 경우)
    pub fn email(&self) -> Option<&str> {
        match self {
            FieldChange::Email(email) => Some(email.as_str()),
            _ => None,
        }
    }
}

/// 요청 본문 전체를 변환합니다.
///
/// 첫 번째 실패에서 `AppError::ValidationError`로 중단합니다.
pub fn parse_changes(changes: &PatchRequest) -> AppResult<Vec<FieldChange>> {
    changes
        .iter()
        .map(|(field, value)| coerce_field(field, value))
        .collect()
}

fn coerce_field(field: &str, value: &Value) -> AppResult<FieldChange> {
    let coercion = PATCHABLE_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, coercion)| *coercion)
        .ok_or_else(|| AppError::ValidationError(format!("Field not allowed: {}", field)))?;

    coercion(value)
}

fn text_of(field: &str, value: &Value) -> AppResult<String> {
    json_value_as_text(value).ok_or_else(|| {
        AppError::ValidationError(format!("Invalid value for field {}: {}", field, value))
    })
}

fn coerce_name(value: &Value) -> AppResult<FieldChange> {
    let name = text_of("name", value)?;
    validate_name(&name).map_err(|e| {
        let reason = e.message.map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
        AppError::ValidationError(reason)
    })?;
    Ok(FieldChange::Name(name))
}

fn coerce_email(value: &Value) -> AppResult<FieldChange> {
    let email = text_of("email", value)?;
    if !email.validate_email() {
        return Err(AppError::ValidationError(format!("Invalid email: {}", email)));
    }
    Ok(FieldChange::Email(email))
}

fn coerce_salary(value: &Value) -> AppResult<FieldChange> {
    let text = text_of("salary", value)?;
    let trimmed = text.trim();
    let salary = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AppError::ValidationError(format!("Invalid salary: {}", text)))?;

    validate_salary(&salary)
        .map_err(|_| AppError::ValidationError(format!("Invalid salary: {}", text)))?;

    Ok(FieldChange::Salary(salary))
}

fn coerce_hire_date(value: &Value) -> AppResult<FieldChange> {
    let text = text_of("hireDate", value)?;
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map(FieldChange::HireDate)
        .map_err(|_| AppError::ValidationError(format!("Invalid hireDate: {}", text)))
}
