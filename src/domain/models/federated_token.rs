//! Firebase 커스텀 토큰 클레임
//!
//! Firebase Auth 의 `signInWithCustomToken` 이 받아들이는 JWT 페이로드 구조입니다.
//! RFC 7519 표준 클레임에 `uid`와 개발자 정의 `claims`가 더해집니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::AuthProvider;
use crate::domain::models::linkedin_profile::ExternalProfile;

/// 커스텀 토큰의 `aud` 값 (고정)
pub const FIREBASE_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";

/// 앱 세션으로 넘겨줄 개발자 정의 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedClaims {
    pub provider: AuthProvider,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// 외부 신원에 묶인 Firebase 사용자 식별 정보
///
/// `uid`는 `"<provider>:<subject_id>"` 형태로 네임스페이스가 붙습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FederatedIdentity {
    pub uid: String,
    pub claims: FederatedClaims,
}

impl FederatedIdentity {
    pub fn from_profile(provider: AuthProvider, profile: &ExternalProfile) -> Self {
        Self {
            uid: format!("{}:{}", provider.as_str(), profile.subject_id),
            claims: FederatedClaims {
                provider,
                email: profile.email.clone(),
                display_name: profile.display_name(),
            },
        }
    }
}

/// 커스텀 토큰 JWT 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTokenClaims {
    /// 항상 [`FIREBASE_AUDIENCE`]
    pub aud: String,
    /// 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 만료 시간 (Unix timestamp), 발급 후 최대 1시간
    pub exp: i64,
    /// 서명한 서비스 계정 이메일
    pub iss: String,
    /// `iss`와 동일
    pub sub: String,
    /// Firebase 사용자 uid
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_from_profile() {
        let profile = ExternalProfile {
            subject_id: "xyz".into(),
            given_name: "Jane".into(),
            family_name: "Doe".into(),
            email: "jane@x.com".into(),
        };
        let identity = FederatedIdentity::from_profile(AuthProvider::LinkedIn, &profile);

        assert_eq!(identity.uid, "linkedin:xyz");
        assert_eq!(
            serde_json::to_value(&identity.claims).unwrap(),
            json!({ "provider": "linkedin", "email": "jane@x.com", "displayName": "Jane Doe" })
        );
    }
}
