//! Employee Entity Implementation
//!
//! 직원 엔티티의 핵심 구현체입니다.
//! 저장소가 부여한 정수 ID와 변경 가능한 네 개의 필드로 구성됩니다.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 저장된 직원 레코드
///
/// JSON으로는 `id`, `name`, `email`, `salary`, `hireDate` 필드로 직렬화됩니다.
/// `id`는 생성 시 저장소가 부여하며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    /// 전체 직원 중 유일해야 하는 이메일
    pub email: String,
    /// 응답에서는 JSON 숫자로 직렬화됩니다.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub salary: Option<Decimal>,
    pub hire_date: Option<NaiveDate>,
}

/// 아직 ID가 부여되지 않은 직원 데이터
///
/// 생성 요청과 전체 수정 요청 모두 이 형태로 서비스 계층에 전달됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub salary: Option<Decimal>,
    pub hire_date: Option<NaiveDate>,
}

impl Employee {
    /// 저장소가 부여한 ID로 새 엔티티를 만듭니다.
    pub fn from_new(id: i64, data: NewEmployee) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            salary: data.salary,
            hire_date: data.hire_date,
        }
    }

    /// ID를 제외한 모든 필드를 교체합니다 (PUT 의미론).
    pub fn replace_with(&mut self, data: NewEmployee) {
        self.name = data.name;
        self.email = data.email;
        self.salary = data.salary;
        self.hire_date = data.hire_date;
    }
}
