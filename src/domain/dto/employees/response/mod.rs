//! 직원 관련 응답 DTO
//!
//! 직원 데이터 자체는 [`Employee`](crate::domain::entities::employees::Employee)
//! 엔티티가 그대로 직렬화됩니다. 여기에는 그 외의 응답 본문만 정의합니다.

use serde::{Deserialize, Serialize};

/// 삭제 완료 등 단순 확인 메시지 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn employee_deleted() -> Self {
        Self::new("Employee deleted")
    }
}
