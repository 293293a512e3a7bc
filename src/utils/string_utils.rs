//! # 문자열 유틸리티
//!
//! 요청 검증에서 공통으로 사용하는 문자열 처리 함수들입니다.

use validator::ValidationError;

/// 공백 문자만으로 이루어지지 않은 문자열인지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator`의 `custom` 검증 함수로 사용되는 필수 문자열 검사
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("must not be blank".into()));
    }
    Ok(())
}

/// JSON 값을 텍스트로 변환합니다.
///
/// 문자열은 따옴표 없이 그대로, 숫자와 불리언은 JSON 표기 그대로 변환합니다.
/// `null`, 배열, 객체는 텍스트로 취급하지 않고 `None`을 반환합니다.
pub fn json_value_as_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
