//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 필드에 실제 내용이 있는지 확인
///
/// 요청 DTO의 `Option<String>` 필드가 존재하고 공백이 아닌 내용을
/// 담고 있는지 검사합니다. 필수 필드 누락 검증에 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::has_text;
///
/// assert!(has_text(&Some("Alice".to_string())));
/// assert!(!has_text(&Some("   ".to_string())));
/// assert!(!has_text(&None));
/// ```
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().map(is_valid_string).unwrap_or(false)
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 인자
/// * `value` - 정리할 Option<String>
///
/// # 반환값
/// * `None` - 값이 없거나 빈 문자열인 경우
/// * `Some(String)` - 정리된 유효한 문자열
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

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// serde의 `#[serde(default, deserialize_with = "deserialize_optional_string")]`
/// 속성과 함께 사용됩니다.
///
/// # 반환값
/// * `Ok(Some(String))` - 유효한 문자열 (앞뒤 공백 제거됨)
/// * `Ok(None)` - null 값, 빈 문자열, 또는 공백만 있는 경우
/// * `Err(D::Error)` - 역직렬화 실패 시
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_has_text() {
        assert!(has_text(&Some("Alice".to_string())));
        assert!(has_text(&Some("  Bob  ".to_string())));
        assert!(!has_text(&Some("".to_string())));
        assert!(!has_text(&Some("   ".to_string())));
        assert!(!has_text(&None));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("Hello".to_string())),
            Some("Hello".to_string())
        );
        assert_eq!(
            clean_optional_string(Some("  World  ".to_string())),
            Some("World".to_string())
        );
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let json = r#"{"optional_field": "  Hello World  "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        // 빈 문자열 - None 반환
        let json = r#"{"optional_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 공백만 있는 문자열 - None 반환
        let json = r#"{"optional_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // null 값 - None 반환
        let json = r#"{"optional_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);

        // 필드 자체가 없는 경우 - default로 None 반환
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_with_korean() {
        use serde::Deserialize;

        #[derive(Deserialize)]
        struct KoreanTestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            korean_field: Option<String>,
        }

        // 한글 문자열 테스트
        let json = r#"{"korean_field": "  안녕하세요  "}"#;
        let result: KoreanTestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.korean_field, Some("안녕하세요".to_string()));
    }
}
