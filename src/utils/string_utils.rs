//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use validator::ValidationError;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator`의 custom 검증 함수: 공백만 있는 문자열을 거부합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateSpecialtyRequest {
///     #[validate(custom(function = "validate_not_blank"))]
///     nome: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("값은 비어 있을 수 없습니다".into()));
    }
    Ok(())
}

/// 정규식 메타 문자를 이스케이프합니다.
///
/// 사용자 입력을 MongoDB `$regex` 조건에 넣을 때 리터럴 부분 문자열로 취급되도록 합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(escape_regex("a.b*c"), r"a\.b\*c");
/// ```
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '#' | '-'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON/쿼리 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// 필드가 없을 수 있는 경우 `#[serde(default)]`와 함께 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct PhysicianListQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     nome: Option<String>,
/// }
///
/// // ?nome=%20jo%20 → Some("jo")
/// // ?nome=        → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 없는 필드와 명시적 `null`을 구분하는 serde deserializer
///
/// `#[serde(default)]`와 함께 사용하면 필드가 없을 때 `None`,
/// `null`이면 `Some(None)`, 값이 있으면 `Some(Some(value))`가 됩니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UpdatePhysicianRequest {
///     #[serde(rename = "telefone", default, deserialize_with = "deserialize_nullable")]
///     phone: Option<Option<String>>,
/// }
/// ```
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
