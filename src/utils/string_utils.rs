//! # 문자열 유틸리티
//!
//! 업스트림 응답과 쿼리 파라미터 정리, 로그용 비밀값 마스킹 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Jane  ".to_string())), Some("Jane".to_string()));
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
/// 빈 문자열이나 공백만 있는 문자열을 None으로 취급합니다.
/// 필드가 아예 없을 수도 있으므로 `#[serde(default)]`와 함께 사용하세요.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UserInfo {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     given_name: Option<String>,
/// }
///
/// // {"given_name": "  Jane  "} → Some("Jane")
/// // {"given_name": ""}         → None
/// // {}                         → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 로그 출력용으로 비밀값을 마스킹합니다.
///
/// 앞 4글자와 전체 길이만 남깁니다. 8글자 이하의 값은 전부 가립니다.
///
/// ```rust,ignore
/// assert_eq!(mask_secret("AQXdSP_W41_UPs5ioT"), "AQXd…(18)");
/// assert_eq!(mask_secret("short"), "***");
/// ```
pub fn mask_secret(value: &str) -> String {
    let len = value.chars().count();
    if len <= 8 {
        return "***".to_string();
    }

    let prefix: String = value.chars().take(4).collect();
    format!("{}…({})", prefix, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some(" \t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            field: Option<String>,
        }

        let parsed: TestStruct = serde_json::from_str(r#"{"field": "  Doe  "}"#).unwrap();
        assert_eq!(parsed.field, Some("Doe".to_string()));

        let parsed: TestStruct = serde_json::from_str(r#"{"field": "   "}"#).unwrap();
        assert_eq!(parsed.field, None);

        let parsed: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(parsed.field, None);

        // 필드 자체가 없는 경우
        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.field, None);
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("AQXdSP_W41_UPs5ioT"), "AQXd…(18)");
        assert_eq!(mask_secret("tok1"), "***");
        assert_eq!(mask_secret(""), "***");
    }
}
