//! # LinkedIn 사용자 정보 모델
//!
//! LinkedIn OpenID Connect `userinfo` 엔드포인트
//! (`https://api.linkedin.com/v2/userinfo`) 응답과, 릴레이가 실제로 쓰는
//! [`ExternalProfile`] 스냅샷을 정의합니다.
//!
//! ## OAuth 2.0 스코프 요구사항
//!
//! | 필드 | 필수 스코프 |
//! |------|-------------|
//! | `sub` | `openid` |
//! | `given_name`, `family_name` | `profile` |
//! | `email` | `email` |
//!
//! 그 밖의 필드(`name`, `picture`, `locale` 등)는 읽지 않습니다.

use serde::Deserialize;

use crate::errors::RelayError;
use crate::utils::string_utils::deserialize_optional_string;

/// 이름이 없을 때 사용하는 기본값
pub const DEFAULT_GIVEN_NAME: &str = "Unknown";
/// 성이 없을 때 사용하는 기본값
pub const DEFAULT_FAMILY_NAME: &str = "User";
/// 이메일이 없을 때 사용하는 자리표시 주소
pub const DEFAULT_EMAIL: &str = "no-email@linkedin.com";

/// `userinfo` 응답 원본
///
/// 빈 문자열은 모두 None 으로 정리됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInUserInfo {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub given_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub family_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
}

/// 외부 프로필 스냅샷
///
/// `subject_id`만 필수이고 나머지는 기본값으로 채워집니다.
/// 누락 필드를 거부하지 않고 채우는 것은 정책상의 선택입니다 (DESIGN.md 참고).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalProfile {
    pub subject_id: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}

impl ExternalProfile {
    /// `"<given_name> <family_name>"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

impl TryFrom<LinkedInUserInfo> for ExternalProfile {
    type Error = RelayError;

    fn try_from(info: LinkedInUserInfo) -> Result<Self, Self::Error> {
        let subject_id = info.sub.ok_or_else(|| RelayError::ProfileFetchFailed {
            message: "userinfo response has no 'sub'".to_string(),
            details: None,
        })?;

        Ok(Self {
            subject_id,
            given_name: info.given_name.unwrap_or_else(|| DEFAULT_GIVEN_NAME.to_string()),
            family_name: info.family_name.unwrap_or_else(|| DEFAULT_FAMILY_NAME.to_string()),
            email: info.email.unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile_from(value: serde_json::Value) -> Result<ExternalProfile, RelayError> {
        let info: LinkedInUserInfo = serde_json::from_value(value).unwrap();
        ExternalProfile::try_from(info)
    }

    #[test]
    fn test_full_profile() {
        let profile = profile_from(json!({
            "sub": "xyz",
            "given_name": "Jane",
            "family_name": "Doe",
            "email": "jane@x.com",
            "email_verified": true,
            "locale": { "country": "US", "language": "en" }
        }))
        .unwrap();

        assert_eq!(profile.subject_id, "xyz");
        assert_eq!(profile.email, "jane@x.com");
        assert_eq!(profile.display_name(), "Jane Doe");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let profile = profile_from(json!({ "sub": "xyz" })).unwrap();

        assert_eq!(profile.given_name, "Unknown");
        assert_eq!(profile.family_name, "User");
        assert_eq!(profile.email, "no-email@linkedin.com");
        assert_eq!(profile.display_name(), "Unknown User");
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let profile = profile_from(json!({
            "sub": "xyz",
            "given_name": "",
            "family_name": "  ",
            "email": null
        }))
        .unwrap();

        assert_eq!(profile.display_name(), "Unknown User");
        assert_eq!(profile.email, DEFAULT_EMAIL);
    }

    #[test]
    fn test_missing_sub_is_rejected() {
        let err = profile_from(json!({ "given_name": "Jane" })).unwrap_err();
        assert!(matches!(err, RelayError::ProfileFetchFailed { .. }));
    }
}
