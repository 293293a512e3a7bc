//! 직원 생성/전체 수정 요청 DTO
//!
//! `POST`와 `PUT` 요청 본문의 구조와 검증 규칙을 정의합니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::employees::NewEmployee;
use crate::utils::string_utils::validate_not_blank;

/// 이름의 최대 길이 (문자 수)
pub const NAME_MAX_CHARS: usize = 100;

/// 직원 전체 데이터를 담는 요청 본문
///
/// 본문에 `id`가 포함되어 있어도 무시됩니다.
/// 생성 시에는 저장소가 ID를 부여하고, 수정 시에는 경로의 ID가 우선합니다.
///
/// ```json
/// {
///   "name": "Elena Garcia",
///   "email": "elena.g@example.com",
///   "salary": 55000.00,
///   "hireDate": "2023-08-15"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// 누락되면 빈 문자열로 역직렬화되어 검증 단계에서 거부됩니다.
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_salary"))]
    pub salary: Option<Decimal>,

    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

/// 이름은 공백이 아니어야 하며 1~100자여야 합니다.
///
/// `POST`/`PUT` 본문 검증과 `PATCH` 필드 변환이 함께 사용합니다.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_not_blank(name)?;

    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::new("name_too_long")
            .with_message(format!("name must be at most {} characters", NAME_MAX_CHARS).into()));
    }
    Ok(())
}

/// 급여는 음수가 될 수 없습니다.
pub fn validate_salary(salary: &Decimal) -> Result<(), ValidationError> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(ValidationError::new("negative_salary")
            .with_message("salary must not be negative".into()));
    }
    Ok(())
}

impl EmployeeRequest {
    /// 검증을 수행하고 서비스 계층에서 사용하는 [`NewEmployee`]로 변환합니다.
    pub fn into_new_employee(self) -> AppResult<NewEmployee> {
        self.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(NewEmployee {
            name: self.name,
            email: self.email,
            salary: self.salary,
            hire_date: self.hire_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> EmployeeRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_accepts_numeric_and_string_salary() {
        let numeric = parse(json!({
            "name": "Elena", "email": "elena@example.com",
            "salary": 55000.00, "hireDate": "2023-08-15"
        }));
        let textual = parse(json!({
            "name": "Elena", "email": "elena@example.com", "salary": "55000.00"
        }));

        assert_eq!(numeric.salary, Some(Decimal::new(55000, 0)));
        assert_eq!(textual.salary, Some(Decimal::new(5500000, 2)));
        assert_eq!(numeric.hire_date, NaiveDate::from_ymd_opt(2023, 8, 15));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let request = parse(json!({ "name": "Elena", "email": "elena@example.com" }));

        assert!(request.id.is_none());
        assert!(request.salary.is_none());
        assert!(request.hire_date.is_none());
    }

    #[test]
    fn test_into_new_employee_rejects_invalid_fields() {
        let blank_name = parse(json!({ "name": "   ", "email": "elena@example.com" }));
        let bad_email = parse(json!({ "name": "Elena", "email": "not-an-email" }));
        let negative = parse(json!({ "name": "Elena", "email": "e@example.com", "salary": "-1" }));

        assert!(matches!(blank_name.into_new_employee(), Err(AppError::ValidationError(_))));
        assert!(matches!(bad_email.into_new_employee(), Err(AppError::ValidationError(_))));
        assert!(matches!(negative.into_new_employee(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_missing_name_and_email_fail_validation_not_parsing() {
        let request = parse(json!({ "salary": 1 }));

        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert!(matches!(request.into_new_employee(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validate_name_bounds() {
        assert!(validate_name("E").is_ok());
        assert!(validate_name(&"a".repeat(NAME_MAX_CHARS)).is_ok());
        assert!(validate_name(&"a".repeat(NAME_MAX_CHARS + 1)).is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_into_new_employee_drops_body_id() {
        let request = parse(json!({ "id": 99, "name": "Elena", "email": "elena@example.com" }));
        let draft = request.into_new_employee().unwrap();

        assert_eq!(draft.name, "Elena");
        assert_eq!(draft.email, "elena@example.com");
    }
}
